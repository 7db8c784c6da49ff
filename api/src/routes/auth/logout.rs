use actix_web::{web, HttpResponse};

use catalog_shared::MessageResponse;

use crate::dto::auth::LogoutRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::{AppState, Backend};

/// Handler for POST /auth/logout
///
/// Requires authentication via `Authorization: Token {key}`. With
/// `logout_all_devices` the account token is deleted; otherwise the call is
/// only acknowledged, since every client of the account shares that token.
/// The body may be omitted.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "Logged out successfully." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: The token was already deleted
/// - 401 Unauthorized: Missing or invalid token
pub async fn logout<B: Backend>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
    request: Option<web::Json<LogoutRequest>>,
) -> HttpResponse {
    let request = request.map(web::Json::into_inner).unwrap_or_default();

    match state
        .auth_service
        .logout(auth.account_id, request.logout_all_devices)
        .await
    {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Logged out successfully.")),
        Err(error) => handle_domain_error(error),
    }
}
