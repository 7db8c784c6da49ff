//! Account entity representing a registered listener.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a username
pub const MAX_USERNAME_LENGTH: usize = 150;

/// Maximum length of first and last names
pub const MAX_NAME_LENGTH: usize = 150;

/// Registered account
///
/// Accounts are created inactive and become active only after the email
/// OTP has been verified. An inactive account cannot log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Unique login name
    pub username: String,

    /// Unique, normalized email address
    pub email: String,

    /// bcrypt hash of the password, never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub first_name: String,

    pub last_name: String,

    /// Whether the email address has been confirmed
    pub is_active: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the last successful login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Creates a new, inactive account
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            first_name,
            last_name,
            is_active: false,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Marks the account as active
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Records a successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}
