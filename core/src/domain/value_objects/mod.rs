//! Value objects representing immutable domain concepts.

pub mod account_profile;
pub mod auth_outcome;

// Re-export commonly used types
pub use account_profile::AccountProfile;
pub use auth_outcome::{LoginResult, LogoutOutcome, RegistrationResult};
