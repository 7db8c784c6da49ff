//! Configuration for the OTP service

use catalog_shared::config::otp::{
    DEFAULT_OTP_ALLOWED_CHARS, DEFAULT_OTP_LENGTH, DEFAULT_OTP_TTL_SECONDS,
};
use catalog_shared::{Environment, OtpConfig};

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of characters in a code
    pub length: usize,
    /// Characters a code is drawn from
    pub allowed_chars: String,
    /// Lifetime of a pending code in seconds
    pub ttl_seconds: u64,
    /// Whether issued codes may be returned to the caller
    pub echo_enabled: bool,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_OTP_LENGTH,
            allowed_chars: DEFAULT_OTP_ALLOWED_CHARS.to_string(),
            ttl_seconds: DEFAULT_OTP_TTL_SECONDS,
            echo_enabled: false,
        }
    }
}

impl OtpServiceConfig {
    /// Build from the environment-level settings
    pub fn from_settings(settings: &OtpConfig, environment: Environment) -> Self {
        Self {
            length: settings.length,
            allowed_chars: settings.allowed_chars.clone(),
            ttl_seconds: settings.ttl_seconds,
            echo_enabled: settings.echo_enabled(environment),
        }
    }
}
