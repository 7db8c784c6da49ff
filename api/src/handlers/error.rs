//! Mapping of domain errors to HTTP responses

use std::collections::HashMap;

use actix_web::{error::JsonPayloadError, HttpRequest, HttpResponse};

use catalog_core::errors::{AuthError, DomainError};
use catalog_shared::{error_codes, ErrorResponse};

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => {
            let body = ErrorResponse::new(auth_error.code(), auth_error.to_string());
            match auth_error {
                AuthError::InvalidCredentials
                | AuthError::AuthenticationRequired
                | AuthError::InvalidToken => {
                    log::info!("Authentication rejected: {}", auth_error);
                    HttpResponse::Unauthorized().json(body)
                }
                AuthError::InvalidOtp
                | AuthError::AccountNotFound
                | AuthError::OtpAlreadyPending
                | AuthError::AlreadyLoggedOut => {
                    log::info!("Request rejected: {}", auth_error);
                    HttpResponse::BadRequest().json(body)
                }
            }
        }
        DomainError::ValidationErr(validation_error) => {
            log::info!("Validation failed: {}", validation_error);
            HttpResponse::BadRequest().json(
                ErrorResponse::new(error_codes::VALIDATION_ERROR, validation_error.to_string())
                    .add_detail("fields", validation_error.field_errors()),
            )
        }
        DomainError::Validation { message } => {
            log::info!("Validation failed: {}", message);
            HttpResponse::BadRequest().json(ErrorResponse::new(error_codes::VALIDATION_ERROR, message))
        }
        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().json(ErrorResponse::new(
                error_codes::NOT_FOUND,
                format!("Not found: {}", resource),
            ))
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            ))
        }
    }
}

/// Convert `validator` failures into a 400 with per-field messages
pub fn handle_validation_errors(errors: validator::ValidationErrors) -> HttpResponse {
    let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
    for (field, errors) in errors.field_errors() {
        let messages = errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        field_errors.insert(field.to_string(), messages);
    }

    log::info!("Request validation failed: {:?}", field_errors);

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("fields", field_errors),
    )
}

/// Error handler for malformed JSON bodies
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = error.to_string();
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        format!("Invalid request body: {}", message),
    ));
    actix_web::error::InternalError::from_response(message, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};
    use catalog_core::errors::ValidationError;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_already_logged_out_is_bad_request() {
        let response = handle_domain_error(AuthError::AlreadyLoggedOut.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "ALREADY_LOGGED_OUT");
        assert_eq!(body["message"], "Invalid token or already logged out.");
    }

    #[actix_web::test]
    async fn test_invalid_credentials_is_unauthorized() {
        let response = handle_domain_error(AuthError::InvalidCredentials.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_duplicate_value_carries_field_details() {
        let error: DomainError = ValidationError::DuplicateValue {
            field: "username".to_string(),
        }
        .into();
        let response = handle_domain_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body["details"]["fields"]["username"][0],
            "A user with that username already exists."
        );
    }

    #[actix_web::test]
    async fn test_internal_error_hides_message() {
        let response = handle_domain_error(DomainError::Internal {
            message: "connection refused".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "An internal error occurred");
    }

    #[actix_web::test]
    async fn test_not_found() {
        let response = handle_domain_error(DomainError::NotFound {
            resource: "song 7".to_string(),
        });
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
