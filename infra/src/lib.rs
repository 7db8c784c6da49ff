//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `catalog_core`.
//!
//! ## Architecture
//!
//! - **Database**: MySQL repositories using SQLx, plus embedded migrations
//! - **Cache**: Redis client and Redis-backed OTP cache, and an in-memory TTL cache
//! - **Notify**: OTP delivery implementations
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable Redis caching support (default)

// Re-export core error types for convenience
pub use catalog_core::errors::{DomainError, DomainResult};

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Cache module - OTP caches and the Redis client
pub mod cache;

/// Notify module - OTP delivery
pub mod notify;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}
