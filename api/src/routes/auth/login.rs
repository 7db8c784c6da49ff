use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::{AppState, Backend};

/// Handler for POST /auth/username/login
///
/// # Request Body
///
/// ```json
/// { "username": "listener", "password": "..." }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "user": { "id": "...", "username": "listener", "email": "listener@example.com" },
///     "token": "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b"
/// }
/// ```
///
/// Repeated logins return the same token.
///
/// ## Errors
/// - 400 Bad Request: Blank username or password
/// - 401 Unauthorized: Unknown user, wrong password or inactive account
pub async fn login<B: Backend>(
    state: web::Data<AppState<B>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(LoginResponse::from(result)),
        Err(error) => handle_domain_error(error),
    }
}
