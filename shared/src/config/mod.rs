//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Password policy and hashing
//! - `cache` - Redis configuration for the OTP cache
//! - `database` - Storage backend and connection pool configuration
//! - `environment` - Environment detection
//! - `otp` - One-time code length, alphabet, lifetime and debug echo
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod otp;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use database::{DataBackend, DatabaseConfig};
pub use environment::Environment;
pub use otp::OtpConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Cache configuration
    pub cache: CacheConfig,

    /// One-time code configuration
    pub otp: OtpConfig,

    /// Password policy configuration
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            otp: OtpConfig::from_env(),
            auth: AuthConfig::from_env(),
        }
    }

    /// Whether issued codes are echoed in API responses
    pub fn otp_echo_enabled(&self) -> bool {
        self.otp.echo_enabled(self.environment)
    }
}
