//! MySQL repository implementations

mod account_repository_impl;
mod play_history_repository_impl;
mod song_repository_impl;
mod token_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use play_history_repository_impl::MySqlPlayHistoryRepository;
pub use song_repository_impl::MySqlSongRepository;
pub use token_repository_impl::MySqlTokenRepository;

use catalog_core::errors::DomainError;
use uuid::Uuid;

/// Wrap a driver error with the failed operation
pub(crate) fn db_error(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!(error = %error, operation = context, "Database operation failed");
    DomainError::Internal {
        message: format!("{}: {}", context, error),
    }
}

/// Whether the error is a unique-key collision
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// Whether InnoDB aborted the transaction to break a lock cycle
pub(crate) fn is_deadlock(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("40001"))
}

/// Parse a CHAR(36) column back into a UUID
pub(crate) fn parse_uuid(column: &str, value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|e| DomainError::Internal {
        message: format!("Invalid UUID in {}: {}", column, e),
    })
}
