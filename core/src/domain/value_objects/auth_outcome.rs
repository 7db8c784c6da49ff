//! Results of the account lifecycle operations

use serde::{Deserialize, Serialize};

use super::AccountProfile;
use crate::domain::entities::AuthToken;

/// Outcome of a registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResult {
    pub profile: AccountProfile,

    /// The issued OTP, present only when debug echo is enabled
    pub otp: Option<String>,
}

/// Outcome of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResult {
    pub profile: AccountProfile,
    pub token: AuthToken,

    /// Whether the token was minted by this login
    pub created: bool,
}

/// Outcome of a logout request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogoutOutcome {
    /// The account token was deleted
    TokenRevoked,
    /// Single-device logout: nothing to revoke with one token per account
    Acknowledged,
}
