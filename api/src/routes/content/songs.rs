use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::OptionalAuth;
use crate::routes::{AppState, Backend};

/// Handler for GET /content/songs/{id}
///
/// Anonymous reads are allowed. When the request is authenticated, the
/// retrieval also counts towards the caller's play history.
///
/// ## Errors
/// - 401 Unauthorized: A token was sent but is not valid
/// - 404 Not Found: No such song
pub async fn retrieve_song<B: Backend>(
    state: web::Data<AppState<B>>,
    auth: OptionalAuth,
    path: web::Path<i64>,
) -> HttpResponse {
    let song_id = path.into_inner();
    let viewer = auth.0.map(|ctx| ctx.account_id);

    match state.catalog_service.retrieve_song(song_id, viewer).await {
        Ok(song) => HttpResponse::Ok().json(song),
        Err(error) => handle_domain_error(error),
    }
}
