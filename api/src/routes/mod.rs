//! Route handlers and the shared application state

pub mod auth;
pub mod content;
pub mod health;

use std::sync::Arc;

use catalog_core::repositories::{
    AccountRepository, PlayHistoryRepository, SongRepository, TokenRepository,
};
use catalog_core::services::{
    AuthService, CatalogService, HistoryService, OtpCacheTrait, OtpNotifier,
};

/// Concrete storage types a deployment runs on
///
/// Handlers are generic over this one parameter instead of listing every
/// repository type.
pub trait Backend: 'static {
    type Accounts: AccountRepository + 'static;
    type Tokens: TokenRepository + 'static;
    type OtpCache: OtpCacheTrait + 'static;
    type Notifier: OtpNotifier + 'static;
    type Songs: SongRepository + 'static;
    type History: PlayHistoryRepository + 'static;
}

/// Application state that holds shared services
pub struct AppState<B: Backend> {
    pub auth_service:
        Arc<AuthService<B::Accounts, B::Tokens, B::OtpCache, B::Notifier>>,
    pub catalog_service: Arc<CatalogService<B::Songs, B::History>>,
    pub history_service: Arc<HistoryService<B::History>>,
}
