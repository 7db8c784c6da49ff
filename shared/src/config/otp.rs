//! One-time code configuration for email verification

use serde::{Deserialize, Serialize};

use super::environment::{parse_bool_flag, Environment};

/// Default number of characters in a one-time code
pub const DEFAULT_OTP_LENGTH: usize = 6;

/// Default alphabet: digits followed by uppercase ASCII letters
pub const DEFAULT_OTP_ALLOWED_CHARS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default lifetime of a pending code in seconds
pub const DEFAULT_OTP_TTL_SECONDS: u64 = 120;

/// One-time code settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Number of characters in a generated code
    pub length: usize,

    /// Characters codes are drawn from
    pub allowed_chars: String,

    /// Seconds a code stays verifiable
    pub ttl_seconds: u64,

    /// Echo issued codes in API responses (local testing only)
    pub debug: bool,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_OTP_LENGTH,
            allowed_chars: DEFAULT_OTP_ALLOWED_CHARS.to_string(),
            ttl_seconds: DEFAULT_OTP_TTL_SECONDS,
            debug: false,
        }
    }
}

impl OtpConfig {
    /// Create from `OTP_LENGTH`, `OTP_ALLOWED_CHARS`, `OTP_TTL_SECONDS` and `DEBUG`
    pub fn from_env() -> Self {
        let length = std::env::var("OTP_LENGTH")
            .ok()
            .and_then(|l| l.parse().ok())
            .filter(|l: &usize| *l > 0)
            .unwrap_or(DEFAULT_OTP_LENGTH);
        let allowed_chars = std::env::var("OTP_ALLOWED_CHARS")
            .ok()
            .filter(|chars| !chars.is_empty())
            .unwrap_or_else(|| DEFAULT_OTP_ALLOWED_CHARS.to_string());
        let ttl_seconds = std::env::var("OTP_TTL_SECONDS")
            .ok()
            .and_then(|t| t.parse().ok())
            .filter(|t: &u64| *t > 0)
            .unwrap_or(DEFAULT_OTP_TTL_SECONDS);
        let debug = std::env::var("DEBUG")
            .map(|d| parse_bool_flag(&d))
            .unwrap_or(false);

        Self {
            length,
            allowed_chars,
            ttl_seconds,
            debug,
        }
    }

    /// Whether issued codes may be returned in responses.
    ///
    /// Never true in production, whatever `DEBUG` says.
    pub fn echo_enabled(&self, environment: Environment) -> bool {
        self.debug && !environment.is_production()
    }
}
