use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use super::collaborators::{
    ImagePicker, OtpAck, OtpService, PickerError, SubmissionAck, SubmissionApi, SubmissionError,
};
use super::domain::{Field, KycSubmission, SellerFormState, Stage, ValidationReport};
use super::validation::{FormValidator, ValidationPolicy};

/// Orchestrator for one seller onboarding session.
///
/// The session owns the current [`Stage`] and decides which validators run
/// for each user action; form data stays in the caller-held
/// [`SellerFormState`]. Stage transitions take `&mut self`, so a session can
/// only ever process one transition at a time.
pub struct OnboardingSession<O, P, S> {
    stage: Stage,
    validator: FormValidator,
    otp: Arc<O>,
    picker: Arc<P>,
    submission: Arc<S>,
}

impl<O, P, S> OnboardingSession<O, P, S>
where
    O: OtpService + 'static,
    P: ImagePicker + 'static,
    S: SubmissionApi + 'static,
{
    pub fn new(otp: Arc<O>, picker: Arc<P>, submission: Arc<S>, policy: ValidationPolicy) -> Self {
        Self {
            stage: Stage::CollectingMobile,
            validator: FormValidator::new(policy),
            otp,
            picker,
            submission,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    /// Validate the mobile number and ask the OTP collaborator to deliver a
    /// code. Advances to `AwaitingOtp` only once delivery is acknowledged;
    /// delivery failures surface as a `mobile` report entry.
    pub async fn request_otp(
        &mut self,
        form: &mut SellerFormState,
    ) -> Result<OtpAck, OnboardingError> {
        self.expect_stage(OnboardingAction::RequestOtp, Stage::CollectingMobile)?;

        let mut report = self.validator.validate_mobile(&form.mobile);
        if !report.is_empty() {
            warn!(stage = self.stage.label(), "mobile number rejected");
            return Err(OnboardingError::Rejected(report));
        }

        let ack = match self.otp.send(&form.mobile).await {
            Ok(ack) => ack,
            Err(err) => {
                warn!(stage = self.stage.label(), %err, "otp delivery failed");
                report.flag(Field::Mobile, err.to_string());
                return Err(OnboardingError::Rejected(report));
            }
        };

        form.otp_sent = true;
        self.stage = Stage::AwaitingOtp;
        info!(reference = %ack.reference, "otp dispatched, awaiting code");
        Ok(ack)
    }

    /// Shape-check the entered code, then delegate the actual verification to
    /// the OTP collaborator. Both failure modes surface as an `otp` entry and
    /// leave the session in `AwaitingOtp` for another attempt.
    pub async fn verify_otp(&mut self, form: &SellerFormState) -> Result<OtpAck, OnboardingError> {
        self.expect_stage(OnboardingAction::VerifyOtp, Stage::AwaitingOtp)?;

        let mut report = self.validator.validate_otp(&form.otp);
        if !report.is_empty() {
            warn!(stage = self.stage.label(), "otp input rejected");
            return Err(OnboardingError::Rejected(report));
        }

        let ack = match self.otp.verify(&form.otp).await {
            Ok(ack) => ack,
            Err(err) => {
                warn!(stage = self.stage.label(), %err, "otp verification failed");
                report.flag(Field::Otp, err.to_string());
                return Err(OnboardingError::Rejected(report));
            }
        };

        self.stage = Stage::CollectingKyc;
        info!("otp verified, collecting kyc details");
        Ok(ack)
    }

    /// Ask the device picker for a shop photo and append it to the form.
    /// Picker failures (including cancellation) pass through to the caller.
    pub async fn attach_shop_image(
        &self,
        form: &mut SellerFormState,
    ) -> Result<(), OnboardingError> {
        let image = self.picker.pick().await?;
        info!(uri = %image.uri, "shop image attached");
        form.shop_images.push(image);
        Ok(())
    }

    /// Run every KYC-stage validator, aggregate all failures into one report,
    /// and forward the payload to the submission collaborator only when the
    /// report is empty.
    pub async fn submit_kyc(
        &mut self,
        form: &SellerFormState,
    ) -> Result<SubmissionAck, OnboardingError> {
        self.expect_stage(OnboardingAction::SubmitKyc, Stage::CollectingKyc)?;

        let report = self.validator.validate_kyc(form);
        if !report.is_empty() {
            warn!(
                stage = self.stage.label(),
                failures = report.len(),
                detail = %report.summary(),
                "kyc submission blocked"
            );
            return Err(OnboardingError::Rejected(report));
        }

        let ack = self
            .submission
            .submit(&KycSubmission::from_form(form))
            .await?;
        info!(reference = %ack.reference, "kyc details submitted");
        Ok(ack)
    }

    fn expect_stage(
        &self,
        action: OnboardingAction,
        expected: Stage,
    ) -> Result<(), OnboardingError> {
        if self.stage == expected {
            return Ok(());
        }
        warn!(
            stage = self.stage.label(),
            action = action.label(),
            "action attempted out of sequence"
        );
        Err(OnboardingError::OutOfSequence {
            action,
            stage: self.stage,
        })
    }
}

/// User actions the session gates by stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingAction {
    RequestOtp,
    VerifyOtp,
    SubmitKyc,
}

impl OnboardingAction {
    pub const fn label(self) -> &'static str {
        match self {
            OnboardingAction::RequestOtp => "request_otp",
            OnboardingAction::VerifyOtp => "verify_otp",
            OnboardingAction::SubmitKyc => "submit_kyc",
        }
    }
}

impl fmt::Display for OnboardingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error raised by the onboarding session.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    /// One or more fields failed validation; the report carries every
    /// failure, including collaborator OTP outcomes mapped onto fields.
    #[error("input rejected ({})", .0.summary())]
    Rejected(ValidationReport),
    /// The action is not available in the session's current stage.
    #[error("{action} is not available while {}", stage.label())]
    OutOfSequence {
        action: OnboardingAction,
        stage: Stage,
    },
    #[error(transparent)]
    Picker(#[from] PickerError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl OnboardingError {
    /// Field-level view of the failure, if one exists.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            OnboardingError::Rejected(report) => Some(report),
            _ => None,
        }
    }
}
