use once_cell::sync::Lazy;
use regex::Regex;

/// Mobile number: exactly ten ASCII digits, no country code.
static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile regex compiles"));

/// PAN: five uppercase letters, four digits, one uppercase letter.
static PAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("pan regex compiles"));

/// GSTIN: state code, PAN body, entity digit, literal `Z`, checksum char.
static GST_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("gst regex compiles")
});

pub(crate) fn mobile_is_valid(input: &str) -> bool {
    MOBILE_REGEX.is_match(input)
}

/// Shape-only gate: the collaborator owns actual OTP verification, so this
/// intentionally checks length alone, not character class.
pub(crate) fn otp_has_expected_shape(input: &str, expected_length: usize) -> bool {
    input.chars().count() == expected_length
}

pub(crate) fn pan_is_valid(input: &str) -> bool {
    PAN_REGEX.is_match(input)
}

pub(crate) fn gst_is_valid(input: &str) -> bool {
    GST_REGEX.is_match(input)
}

/// Placeholder strength check carried over from the source flow; there is no
/// structural account-number or IFSC parsing at this layer.
pub(crate) fn bank_details_are_plausible(input: &str, min_chars: usize) -> bool {
    input.chars().count() >= min_chars
}

pub(crate) fn has_enough_shop_images(count: usize, min_images: usize) -> bool {
    count >= min_images
}
