use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use catalog_core::domain::value_objects::{AccountProfile, LoginResult, RegistrationResult};
use catalog_core::services::RegistrationRequest;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password: String,
}

/// Identity fields returned on login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: LoginUser,
    pub token: String,

    /// Whether this login minted the token
    #[serde(rename = "__c__")]
    pub created: bool,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            user: LoginUser {
                id: result.profile.id,
                username: result.profile.username,
                email: result.profile.email,
            },
            token: result.token.key,
            created: result.created,
        }
    }
}

/// Registration body
///
/// Missing fields deserialize as empty strings so that the account
/// validation reports them per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<RegisterRequest> for RegistrationRequest {
    fn from(request: RegisterRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(flatten)]
    pub profile: AccountProfile,

    /// Only present when OTP echo is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

impl From<RegistrationResult> for RegisterResponse {
    fn from(result: RegistrationResult) -> Self {
        Self {
            profile: result.profile,
            otp: result.otp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyEmailRequest {
    #[serde(default)]
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendOtpRequest {
    #[serde(default)]
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendOtpResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// Revoke the account token, signing out every client that uses it
    #[serde(default)]
    pub logout_all_devices: bool,
}
