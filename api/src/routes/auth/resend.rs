use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{ResendOtpRequest, ResendOtpResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::{AppState, Backend};

/// Handler for POST /auth/resend-otp
///
/// Issues a new code unless one is still pending for the email. Whether an
/// account exists for the email is not revealed.
///
/// ## Errors
/// - 400 Bad Request: A code is still pending
pub async fn resend_otp<B: Backend>(
    state: web::Data<AppState<B>>,
    request: web::Json<ResendOtpRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.auth_service.resend_otp(&request.email).await {
        Ok(issued) => HttpResponse::Ok().json(ResendOtpResponse {
            message: "OTP sent successfully.".to_string(),
            otp: issued.echoed_code().map(str::to_string),
        }),
        Err(error) => handle_domain_error(error),
    }
}
