//! Seller onboarding intake: field validation, stage gating, and the
//! collaborator seams for OTP delivery, image picking, and KYC submission.

pub mod collaborators;
pub mod domain;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use collaborators::{
    ImagePicker, OtpAck, OtpError, OtpService, PickerError, SubmissionAck, SubmissionApi,
    SubmissionError,
};
pub use domain::{Field, ImageRef, KycSubmission, SellerFormState, Stage, ValidationReport};
pub use session::{OnboardingAction, OnboardingError, OnboardingSession};
pub use validation::{FormValidator, ValidationPolicy};
