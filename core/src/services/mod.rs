//! Business services containing domain logic and use cases.

pub mod auth;
pub mod catalog;
pub mod history;
pub mod otp;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, RegistrationRequest};
pub use catalog::CatalogService;
pub use history::HistoryService;
pub use otp::{IssuePolicy, IssuedOtp, OtpCacheTrait, OtpNotifier, OtpService, OtpServiceConfig};
