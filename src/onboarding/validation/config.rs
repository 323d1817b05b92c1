use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_OTP_LENGTH: usize = 6;
pub(crate) const DEFAULT_BANK_DETAIL_MIN_CHARS: usize = 6;
pub(crate) const DEFAULT_MIN_SHOP_IMAGES: usize = 1;

/// Tunable thresholds backing the field validators. The defaults reproduce
/// the production screen exactly; hosts may tighten them per market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    pub otp_length: usize,
    pub bank_detail_min_chars: usize,
    pub min_shop_images: usize,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            otp_length: DEFAULT_OTP_LENGTH,
            bank_detail_min_chars: DEFAULT_BANK_DETAIL_MIN_CHARS,
            min_shop_images: DEFAULT_MIN_SHOP_IMAGES,
        }
    }
}
