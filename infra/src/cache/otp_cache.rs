//! Redis-backed OTP cache

use async_trait::async_trait;

use catalog_core::OtpCacheTrait;

use super::RedisClient;

/// OTP cache storing each code as a Redis string with `EX` expiry
#[derive(Clone)]
pub struct RedisOtpCache {
    client: RedisClient,
}

impl RedisOtpCache {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OtpCacheTrait for RedisOtpCache {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.client
            .get(&self.client.make_key(key))
            .await
            .map_err(|e| e.to_string())
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        self.client
            .set_with_expiry(&self.client.make_key(key), value, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        self.client
            .delete(&self.client.make_key(key))
            .await
            .map_err(|e| e.to_string())
    }
}
