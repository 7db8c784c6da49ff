//! Types for OTP issuance

use chrono::{DateTime, Utc};

/// How `issue` treats a code that is still pending for the same email
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuePolicy {
    /// Refuse with `OtpAlreadyPending` while a live code exists (resend)
    CheckExisting,
    /// Replace whatever is pending (registration)
    Overwrite,
}

/// Result of issuing a code
#[derive(Debug, Clone)]
pub struct IssuedOtp {
    /// Normalized email the code was issued for
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    /// Whether the code may be returned to the client
    pub echo: bool,
}

impl IssuedOtp {
    /// The code when echo is enabled
    pub fn echoed_code(&self) -> Option<&str> {
        self.echo.then_some(self.code.as_str())
    }
}
