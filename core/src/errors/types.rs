//! Authentication and validation error types

use std::collections::HashMap;

use catalog_shared::error_codes;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username, wrong password, or inactive account
    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("Invalid OTP.")]
    InvalidOtp,

    #[error("User with this email does not exist.")]
    AccountNotFound,

    #[error("OTP already sent. Please wait before requesting a new one.")]
    OtpAlreadyPending,

    #[error("Invalid token or already logged out.")]
    AlreadyLoggedOut,

    #[error("Authentication credentials were not provided.")]
    AuthenticationRequired,

    #[error("Invalid token.")]
    InvalidToken,
}

impl AuthError {
    /// Machine-readable code used in error responses
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::InvalidOtp => error_codes::INVALID_OTP,
            AuthError::AccountNotFound => error_codes::ACCOUNT_NOT_FOUND,
            AuthError::OtpAlreadyPending => error_codes::OTP_ALREADY_PENDING,
            AuthError::AlreadyLoggedOut => error_codes::ALREADY_LOGGED_OUT,
            AuthError::AuthenticationRequired | AuthError::InvalidToken => {
                error_codes::UNAUTHORIZED
            }
        }
    }
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This field is required: {field}")]
    RequiredField { field: String },

    #[error("Ensure {field} has between {min} and {max} characters.")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("Enter a valid {field}.")]
    PatternMismatch { field: String },

    #[error("Enter a valid email address.")]
    InvalidEmail,

    /// Password rejected by the password policy, one reason per failed rule
    #[error("{}", reasons.join(" "))]
    WeakPassword { reasons: Vec<String> },

    #[error("A user with that {field} already exists.")]
    DuplicateValue { field: String },

    /// Several fields failed at once; messages are grouped per field
    #[error("Invalid request data")]
    Fields { fields: HashMap<String, Vec<String>> },
}

impl ValidationError {
    /// Field-level messages for the error response `details.fields`
    pub fn field_errors(&self) -> HashMap<String, Vec<String>> {
        match self {
            ValidationError::Fields { fields } => fields.clone(),
            ValidationError::RequiredField { field }
            | ValidationError::InvalidLength { field, .. }
            | ValidationError::PatternMismatch { field }
            | ValidationError::DuplicateValue { field } => {
                HashMap::from([(field.clone(), vec![self.to_string()])])
            }
            ValidationError::InvalidEmail => {
                HashMap::from([("email".to_string(), vec![self.to_string()])])
            }
            ValidationError::WeakPassword { reasons } => {
                HashMap::from([("password".to_string(), reasons.clone())])
            }
        }
    }
}
