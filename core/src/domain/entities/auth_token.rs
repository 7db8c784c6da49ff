//! Opaque login token bound to exactly one account.

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of random bytes behind a token key
pub const TOKEN_KEY_BYTES: usize = 20;

/// Length of the hex-encoded key
pub const TOKEN_KEY_LENGTH: usize = TOKEN_KEY_BYTES * 2;

/// Login token. Each account has at most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    /// Opaque secret presented as `Authorization: Token <key>`
    pub key: String,

    /// Owning account
    pub account_id: Uuid,

    pub created_at: DateTime<Utc>,
}

impl AuthToken {
    /// Creates a token with a fresh random key
    pub fn new(account_id: Uuid) -> Self {
        Self {
            key: Self::generate_key(),
            account_id,
            created_at: Utc::now(),
        }
    }

    /// Generates a 40 character lowercase hex key from the OS RNG
    pub fn generate_key() -> String {
        let mut bytes = [0u8; TOKEN_KEY_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_key_shape() {
        let key = AuthToken::generate_key();
        assert_eq!(key.len(), TOKEN_KEY_LENGTH);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_keys_are_unique() {
        let a = AuthToken::new(Uuid::new_v4());
        let b = AuthToken::new(a.account_id);
        assert_ne!(a.key, b.key);
        assert_eq!(a.account_id, b.account_id);
    }
}
