use actix_web::{web, HttpResponse};

use crate::dto::content::HistoryEntry;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::{AppState, Backend};

/// Handler for GET /content/history
///
/// The caller's play counters, most recently played first.
pub async fn list_history<B: Backend>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
) -> HttpResponse {
    match state.history_service.list_history(auth.account_id).await {
        Ok(records) => {
            let entries: Vec<HistoryEntry> = records.into_iter().map(HistoryEntry::from).collect();
            HttpResponse::Ok().json(entries)
        }
        Err(error) => handle_domain_error(error),
    }
}
