//! Configuration for the authentication service

use catalog_shared::AuthConfig;

use super::password::PasswordPolicy;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Rules a new password must satisfy
    pub password_policy: PasswordPolicy,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            password_policy: PasswordPolicy::default(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AuthServiceConfig {
    pub fn from_settings(settings: &AuthConfig) -> Self {
        Self {
            password_policy: PasswordPolicy {
                min_length: settings.password_min_length,
                max_length: settings.password_max_length,
            },
            bcrypt_cost: settings.bcrypt_cost,
        }
    }
}
