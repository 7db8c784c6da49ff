//! Cache module
//!
//! OTP storage behind `catalog_core::OtpCacheTrait`: Redis in deployments,
//! an in-process TTL map for the memory backend and tests.

pub mod memory_cache;
pub mod otp_cache;
pub mod redis_client;

#[cfg(test)]
mod tests;

pub use memory_cache::InMemoryTtlCache;
pub use otp_cache::RedisOtpCache;
pub use redis_client::RedisClient;

// Re-export commonly used types
pub use catalog_shared::config::cache::CacheConfig;
