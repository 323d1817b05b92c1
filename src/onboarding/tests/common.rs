use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::onboarding::collaborators::{
    ImagePicker, OtpAck, OtpError, OtpService, PickerError, SubmissionAck, SubmissionApi,
    SubmissionError,
};
use crate::onboarding::domain::{ImageRef, KycSubmission, SellerFormState};
use crate::onboarding::session::OnboardingSession;
use crate::onboarding::validation::ValidationPolicy;

pub(super) const VALID_MOBILE: &str = "9876543210";
pub(super) const VALID_OTP: &str = "123456";
pub(super) const VALID_PAN: &str = "ABCDE1234F";
pub(super) const VALID_GST: &str = "22AAAAA0000A1Z5";
pub(super) const VALID_BANK: &str = "50100123456789 HDFC0000123";

pub(super) fn shop_image(name: &str) -> ImageRef {
    ImageRef {
        uri: format!("content://media/shop/{name}.jpg"),
        picked_at: Utc::now(),
    }
}

/// Form with every field in a state that passes the default policy.
pub(super) fn valid_form() -> SellerFormState {
    SellerFormState {
        mobile: VALID_MOBILE.to_string(),
        otp: VALID_OTP.to_string(),
        otp_sent: false,
        pan: VALID_PAN.to_string(),
        gst: VALID_GST.to_string(),
        bank: VALID_BANK.to_string(),
        shop_images: vec![shop_image("storefront")],
    }
}

#[derive(Default)]
pub(super) struct StubOtpService {
    pub(super) sent_to: Mutex<Vec<String>>,
    pub(super) verified: Mutex<Vec<String>>,
}

#[async_trait]
impl OtpService for StubOtpService {
    async fn send(&self, mobile: &str) -> Result<OtpAck, OtpError> {
        self.sent_to
            .lock()
            .expect("otp mutex poisoned")
            .push(mobile.to_string());
        Ok(OtpAck {
            reference: format!("sms-{mobile}"),
        })
    }

    async fn verify(&self, otp: &str) -> Result<OtpAck, OtpError> {
        self.verified
            .lock()
            .expect("otp mutex poisoned")
            .push(otp.to_string());
        Ok(OtpAck {
            reference: "verified".to_string(),
        })
    }
}

/// Transport that never reaches the carrier.
pub(super) struct UnreachableOtpService;

#[async_trait]
impl OtpService for UnreachableOtpService {
    async fn send(&self, _mobile: &str) -> Result<OtpAck, OtpError> {
        Err(OtpError::Delivery("SMS gateway timed out".to_string()))
    }

    async fn verify(&self, _otp: &str) -> Result<OtpAck, OtpError> {
        Err(OtpError::Unavailable("SMS gateway timed out".to_string()))
    }
}

/// Delivers codes but rejects every verification attempt.
pub(super) struct MismatchOtpService;

#[async_trait]
impl OtpService for MismatchOtpService {
    async fn send(&self, mobile: &str) -> Result<OtpAck, OtpError> {
        Ok(OtpAck {
            reference: format!("sms-{mobile}"),
        })
    }

    async fn verify(&self, _otp: &str) -> Result<OtpAck, OtpError> {
        Err(OtpError::Rejected("code does not match".to_string()))
    }
}

#[derive(Default)]
pub(super) struct StubPicker {
    counter: AtomicU64,
}

#[async_trait]
impl ImagePicker for StubPicker {
    async fn pick(&self) -> Result<ImageRef, PickerError> {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        Ok(ImageRef {
            uri: format!("content://media/shop/picked-{n}.jpg"),
            picked_at: Utc::now(),
        })
    }
}

pub(super) struct CancelledPicker;

#[async_trait]
impl ImagePicker for CancelledPicker {
    async fn pick(&self) -> Result<ImageRef, PickerError> {
        Err(PickerError::Cancelled)
    }
}

#[derive(Default)]
pub(super) struct MemorySubmission {
    pub(super) received: Mutex<Vec<KycSubmission>>,
}

#[async_trait]
impl SubmissionApi for MemorySubmission {
    async fn submit(&self, submission: &KycSubmission) -> Result<SubmissionAck, SubmissionError> {
        self.received
            .lock()
            .expect("submission mutex poisoned")
            .push(submission.clone());
        Ok(SubmissionAck {
            reference: "kyc-000042".to_string(),
        })
    }
}

pub(super) struct OfflineSubmission;

#[async_trait]
impl SubmissionApi for OfflineSubmission {
    async fn submit(&self, _submission: &KycSubmission) -> Result<SubmissionAck, SubmissionError> {
        Err(SubmissionError::Transport("backend offline".to_string()))
    }
}

pub(super) type StubSession = OnboardingSession<StubOtpService, StubPicker, MemorySubmission>;

pub(super) fn build_session() -> (StubSession, Arc<StubOtpService>, Arc<MemorySubmission>) {
    let otp = Arc::new(StubOtpService::default());
    let submission = Arc::new(MemorySubmission::default());
    let session = OnboardingSession::new(
        otp.clone(),
        Arc::new(StubPicker::default()),
        submission.clone(),
        ValidationPolicy::default(),
    );
    (session, otp, submission)
}

/// Drive a fresh session through OTP request and verification so tests can
/// start at the KYC stage.
pub(super) async fn kyc_stage_session(
    form: &mut SellerFormState,
) -> (StubSession, Arc<StubOtpService>, Arc<MemorySubmission>) {
    let (mut session, otp, submission) = build_session();
    session.request_otp(form).await.expect("otp dispatch");
    session.verify_otp(form).await.expect("otp verification");
    (session, otp, submission)
}
