//! Input types for the authentication service

/// Registration form
#[derive(Debug, Clone, Default)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}
