//! Shared utilities and common types for the song catalog server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Utility functions (email validation, field error collection)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, DataBackend, DatabaseConfig, Environment, OtpConfig,
    ServerConfig,
};
pub use errors::{error_codes, ErrorResponse, MessageResponse};
pub use utils::{email, validation};
