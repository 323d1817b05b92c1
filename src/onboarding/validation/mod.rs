mod config;
mod rules;

pub use config::ValidationPolicy;

use super::domain::{Field, SellerFormState, ValidationReport};

pub(crate) const MOBILE_MESSAGE: &str = "Enter valid 10-digit mobile number";
pub(crate) const OTP_MESSAGE: &str = "Enter valid 6-digit OTP";
pub(crate) const PAN_MESSAGE: &str = "Invalid PAN format";
pub(crate) const GST_MESSAGE: &str = "Invalid GST format";
pub(crate) const BANK_MESSAGE: &str = "Enter valid bank details";
pub(crate) const SHOP_IMAGES_MESSAGE: &str = "Upload at least one shop image";

/// Stateless validator applying the policy thresholds to raw form input.
/// Every check is total over arbitrary strings and never errors.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    policy: ValidationPolicy,
}

impl FormValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Gate for the send-OTP action: mobile number shape only.
    pub fn validate_mobile(&self, mobile: &str) -> ValidationReport {
        let mut report = ValidationReport::new();
        if !rules::mobile_is_valid(mobile) {
            report.flag(Field::Mobile, MOBILE_MESSAGE);
        }
        report
    }

    /// Gate for the verify-OTP action. Length-only on purpose: the OTP
    /// collaborator is the authority on the code's actual value.
    pub fn validate_otp(&self, otp: &str) -> ValidationReport {
        let mut report = ValidationReport::new();
        if !rules::otp_has_expected_shape(otp, self.policy.otp_length) {
            report.flag(Field::Otp, OTP_MESSAGE);
        }
        report
    }

    /// Gate for the submit action. All four KYC validators run regardless of
    /// earlier failures so the report carries every problem at once.
    pub fn validate_kyc(&self, form: &SellerFormState) -> ValidationReport {
        let mut report = ValidationReport::new();
        if !rules::pan_is_valid(&form.pan) {
            report.flag(Field::Pan, PAN_MESSAGE);
        }
        if !rules::gst_is_valid(&form.gst) {
            report.flag(Field::Gst, GST_MESSAGE);
        }
        if !rules::bank_details_are_plausible(&form.bank, self.policy.bank_detail_min_chars) {
            report.flag(Field::Bank, BANK_MESSAGE);
        }
        if !rules::has_enough_shop_images(form.shop_images.len(), self.policy.min_shop_images) {
            report.flag(Field::ShopImages, SHOP_IMAGES_MESSAGE);
        }
        report
    }
}
