//! Seller sign-up / KYC onboarding core.
//!
//! The crate owns the validation and stage-gating logic of the onboarding
//! flow: a mobile number is verified via OTP, then PAN, GST, bank details,
//! and shop photos are collected and format-checked before the submission
//! collaborator is invoked. Rendering, OTP transport, image picking, and the
//! backend submission itself live behind the traits in
//! [`onboarding::collaborators`] and are supplied by the host application.

pub mod config;
pub mod onboarding;
pub mod telemetry;

pub use config::{AppConfig, AppEnvironment, ConfigError};
pub use onboarding::{
    Field, OnboardingError, OnboardingSession, SellerFormState, Stage, ValidationPolicy,
    ValidationReport,
};
