use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::domain::{ImageRef, KycSubmission};

/// Acknowledgement returned by the OTP transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpAck {
    pub reference: String,
}

/// Acknowledgement returned by the KYC backend once a submission is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub reference: String,
}

/// OTP delivery and verification transport. The core treats both calls as
/// opaque and applies no retry or timeout policy of its own.
#[async_trait]
pub trait OtpService: Send + Sync {
    async fn send(&self, mobile: &str) -> Result<OtpAck, OtpError>;
    async fn verify(&self, otp: &str) -> Result<OtpAck, OtpError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum OtpError {
    #[error("OTP delivery failed: {0}")]
    Delivery(String),
    #[error("OTP rejected: {0}")]
    Rejected(String),
    #[error("OTP service unavailable: {0}")]
    Unavailable(String),
}

/// Device-side image selection hook.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    async fn pick(&self) -> Result<ImageRef, PickerError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PickerError {
    #[error("image selection cancelled")]
    Cancelled,
    #[error("image picker failed: {0}")]
    Device(String),
}

/// Backend endpoint receiving the validated KYC payload.
#[async_trait]
pub trait SubmissionApi: Send + Sync {
    async fn submit(&self, submission: &KycSubmission) -> Result<SubmissionAck, SubmissionError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission rejected by backend: {0}")]
    Rejected(String),
    #[error("submission transport unavailable: {0}")]
    Transport(String),
}
