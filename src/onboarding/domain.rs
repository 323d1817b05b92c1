use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields collected by the onboarding screen. Serialized names match the
/// error keys the UI layer renders against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Mobile,
    Otp,
    Pan,
    Gst,
    Bank,
    ShopImages,
}

impl Field {
    pub const fn label(self) -> &'static str {
        match self {
            Field::Mobile => "mobile",
            Field::Otp => "otp",
            Field::Pan => "pan",
            Field::Gst => "gst",
            Field::Bank => "bank",
            Field::ShopImages => "shopImages",
        }
    }
}

/// Position within the onboarding flow. Transitions are forward-only and
/// driven by the session; there is no way back to an earlier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    CollectingMobile,
    AwaitingOtp,
    CollectingKyc,
}

impl Stage {
    pub const fn label(self) -> &'static str {
        match self {
            Stage::CollectingMobile => "collecting_mobile",
            Stage::AwaitingOtp => "awaiting_otp",
            Stage::CollectingKyc => "collecting_kyc",
        }
    }
}

/// Reference to a picked shop photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub uri: String,
    pub picked_at: DateTime<Utc>,
}

/// Mutable form state owned by the screen for the lifetime of one onboarding
/// session. Passed explicitly into session methods rather than held globally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SellerFormState {
    pub mobile: String,
    pub otp: String,
    pub otp_sent: bool,
    pub pan: String,
    pub gst: String,
    pub bank: String,
    pub shop_images: Vec<ImageRef>,
}

impl SellerFormState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Payload handed to the submission collaborator once validation passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycSubmission {
    pub pan: String,
    pub gst: String,
    pub bank: String,
    pub shop_images: Vec<ImageRef>,
}

impl KycSubmission {
    pub fn from_form(form: &SellerFormState) -> Self {
        Self {
            pan: form.pan.clone(),
            gst: form.gst.clone(),
            bank: form.bank.clone(),
            shop_images: form.shop_images.clone(),
        }
    }
}

/// Per-field validation failures from one submit-style action. A field is
/// present only if its validator rejected the input; an empty report means
/// the action may proceed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(flatten)]
    entries: BTreeMap<Field, String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(&mut self, field: Field, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.entries.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Render as `field: message` pairs for logs and error displays.
    pub fn summary(&self) -> String {
        if self.entries.is_empty() {
            return "no validation failures".to_string();
        }
        self.entries
            .iter()
            .map(|(field, message)| format!("{}: {}", field.label(), message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
