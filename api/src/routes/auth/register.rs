use actix_web::{web, HttpResponse};

use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::{AppState, Backend};

/// Handler for POST /auth/register
///
/// Creates an inactive account and sends an activation code to its email.
/// The code is included in the response only when OTP echo is enabled.
///
/// ## Errors
/// - 400 Bad Request: Field errors, including a taken username or email,
///   under `details.fields`
pub async fn register<B: Backend>(
    state: web::Data<AppState<B>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    match state.auth_service.register(request.into_inner().into()).await {
        Ok(result) => HttpResponse::Ok().json(RegisterResponse::from(result)),
        Err(error) => handle_domain_error(error),
    }
}
