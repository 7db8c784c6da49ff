//! Account and password policy configuration

use serde::{Deserialize, Serialize};

/// Password policy and hashing settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Minimum password length
    pub password_min_length: usize,

    /// Maximum password length
    pub password_max_length: usize,

    /// bcrypt work factor (4..=31)
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: 8,
            password_max_length: 128,
            bcrypt_cost: 12,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let password_min_length = std::env::var("PASSWORD_MIN_LENGTH")
            .ok()
            .and_then(|l| l.parse().ok())
            .unwrap_or(defaults.password_min_length);
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|c| c.parse().ok())
            .filter(|c| (4..=31).contains(c))
            .unwrap_or(defaults.bcrypt_cost);

        Self {
            password_min_length,
            bcrypt_cost,
            ..defaults
        }
    }
}
