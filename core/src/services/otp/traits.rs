//! Traits for OTP storage and delivery

use async_trait::async_trait;

/// Key-value cache with per-entry expiry
///
/// Each call is expected to be atomic for its key. Entries past their TTL
/// must read as absent.
#[async_trait]
pub trait OtpCacheTrait: Send + Sync {
    /// Read a live value
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
    /// Store a value, replacing any previous one, expiring after `ttl_seconds`
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String>;
    /// Remove a value, reporting whether a live one was removed
    ///
    /// Removing an absent key is not an error. Among concurrent deletes of
    /// one key at most one sees `true`.
    async fn delete(&self, key: &str) -> Result<bool, String>;
}

/// Out-of-band delivery of a freshly issued code to the account owner
#[async_trait]
pub trait OtpNotifier: Send + Sync {
    async fn deliver(&self, email: &str, code: &str) -> Result<(), String>;
}
