use std::env;
use std::fmt;
use std::num::ParseIntError;

use crate::onboarding::ValidationPolicy;

/// Distinguishes runtime behavior for different stages of the host app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration consumed by hosts embedding the onboarding core.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub policy: ValidationPolicy,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load from the process environment, with `.env` support. Missing
    /// variables fall back to the production screen's defaults.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let defaults = ValidationPolicy::default();
        let otp_length = read_threshold("KYC_OTP_LENGTH", defaults.otp_length)?;
        if otp_length == 0 {
            return Err(ConfigError::ZeroOtpLength);
        }
        let bank_detail_min_chars =
            read_threshold("KYC_BANK_DETAIL_MIN_CHARS", defaults.bank_detail_min_chars)?;
        let min_shop_images = read_threshold("KYC_MIN_SHOP_IMAGES", defaults.min_shop_images)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            policy: ValidationPolicy {
                otp_length,
                bank_detail_min_chars,
                min_shop_images,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn read_threshold(name: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|source| ConfigError::InvalidThreshold { name, source }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls for hosts that hand logging over to this crate.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidThreshold {
        name: &'static str,
        source: ParseIntError,
    },
    ZeroOtpLength,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold { name, .. } => {
                write!(f, "{} must be a non-negative integer", name)
            }
            ConfigError::ZeroOtpLength => write!(f, "KYC_OTP_LENGTH must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidThreshold { source, .. } => Some(source),
            ConfigError::ZeroOtpLength => None,
        }
    }
}
