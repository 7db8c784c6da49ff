use actix_web::{web, HttpResponse};
use validator::Validate;

use catalog_shared::MessageResponse;

use crate::dto::auth::VerifyEmailRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::{AppState, Backend};

/// Handler for POST /auth/verify-email-and-activate-account
///
/// A code is single use: once it activates the account it is discarded.
///
/// ## Errors
/// - 400 Bad Request: Wrong, expired or never issued code, or no account
///   with this email
pub async fn verify_email_and_activate<B: Backend>(
    state: web::Data<AppState<B>>,
    request: web::Json<VerifyEmailRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .verify_and_activate(&request.email, &request.otp)
        .await
    {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Account activated successfully.")),
        Err(error) => handle_domain_error(error),
    }
}
