//! One-time passcodes gating account activation
//!
//! Codes live in an injected TTL cache under `otp:{email}`. Issuing is
//! governed by an explicit [`IssuePolicy`]: registration overwrites any
//! pending code while a resend is refused as long as one is still live.

mod config;
mod generator;
mod service;
mod traits;
mod types;


pub use config::OtpServiceConfig;
pub use generator::generate_code;
pub use service::OtpService;
pub use traits::{OtpCacheTrait, OtpNotifier};
pub use types::{IssuePolicy, IssuedOtp};
