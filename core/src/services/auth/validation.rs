//! Registration form validation

use once_cell::sync::Lazy;
use regex::Regex;

use catalog_shared::email::{is_valid_email, MAX_EMAIL_LENGTH};
use catalog_shared::validation::{validators, ValidationErrors};

use crate::domain::entities::account::{MAX_NAME_LENGTH, MAX_USERNAME_LENGTH};

use super::password::PasswordPolicy;
use super::types::RegistrationRequest;

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9@.+_-]+$").unwrap());

/// Field checks that need no storage access
///
/// `request.email` is expected to be normalized already.
pub fn validate_registration(request: &RegistrationRequest, policy: &PasswordPolicy) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if !validators::not_empty(&request.username) {
        errors.add_error("username", "This field may not be blank.", "required");
    } else if !validators::length_between(&request.username, 1, MAX_USERNAME_LENGTH) {
        errors.add_error(
            "username",
            format!("Ensure this field has no more than {} characters.", MAX_USERNAME_LENGTH),
            "max_length",
        );
    } else if !validators::matches_pattern(&request.username, &USERNAME_REGEX) {
        errors.add_error(
            "username",
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
            "invalid",
        );
    }

    if !validators::not_empty(&request.email) {
        errors.add_error("email", "This field may not be blank.", "required");
    } else if request.email.chars().count() > MAX_EMAIL_LENGTH {
        errors.add_error(
            "email",
            format!("Ensure this field has no more than {} characters.", MAX_EMAIL_LENGTH),
            "max_length",
        );
    } else if !is_valid_email(&request.email) {
        errors.add_error("email", "Enter a valid email address.", "invalid");
    }

    for (field, value) in [("first_name", &request.first_name), ("last_name", &request.last_name)] {
        if value.chars().count() > MAX_NAME_LENGTH {
            errors.add_error(
                field,
                format!("Ensure this field has no more than {} characters.", MAX_NAME_LENGTH),
                "max_length",
            );
        }
    }

    if request.password.is_empty() {
        errors.add_error("password", "This field may not be blank.", "required");
    } else {
        for problem in policy.check(&request.password, &request.username, &request.email) {
            errors.add_error("password", problem, "password_policy");
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            username: "melody_fan".to_string(),
            email: "fan@example.com".to_string(),
            password: "Tr4ck-list-Zebra".to_string(),
            first_name: "Mel".to_string(),
            last_name: "Ody".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        let errors = validate_registration(&request(), &PasswordPolicy::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_username_rules() {
        let policy = PasswordPolicy::default();

        let mut bad_chars = request();
        bad_chars.username = "mel ody!".to_string();
        let fields = validate_registration(&bad_chars, &policy).to_field_errors();
        assert!(fields["username"][0].starts_with("Enter a valid username"));

        let mut too_long = request();
        too_long.username = "a".repeat(MAX_USERNAME_LENGTH + 1);
        let fields = validate_registration(&too_long, &policy).to_field_errors();
        assert!(fields["username"][0].contains("150"));

        let mut blank = request();
        blank.username = "  ".to_string();
        assert!(validate_registration(&blank, &policy).to_field_errors().contains_key("username"));
    }

    #[test]
    fn test_email_and_names() {
        let mut req = request();
        req.email = "not-an-email".to_string();
        req.last_name = "x".repeat(MAX_NAME_LENGTH + 1);

        let fields = validate_registration(&req, &PasswordPolicy::default()).to_field_errors();
        assert_eq!(fields["email"], vec!["Enter a valid email address.".to_string()]);
        assert!(fields.contains_key("last_name"));
        assert!(!fields.contains_key("first_name"));
    }

    #[test]
    fn test_password_problems_are_collected() {
        let mut req = request();
        req.password = "1234".to_string();
        let fields = validate_registration(&req, &PasswordPolicy::default()).to_field_errors();
        assert!(fields["password"].len() >= 2);
    }
}
