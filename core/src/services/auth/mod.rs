//! Account lifecycle: registration, email activation, login and logout
//!
//! Accounts start inactive. Activation requires the OTP issued at
//! registration (or a later resend). Login hands out the account's single
//! opaque token, creating it on first use.

mod config;
mod password;
mod service;
mod types;
mod validation;


pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password, PasswordPolicy};
pub use service::AuthService;
pub use types::RegistrationRequest;
pub use validation::validate_registration;
