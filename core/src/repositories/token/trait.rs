//! Token repository trait defining the interface for login token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::AuthToken;
use crate::errors::DomainError;

/// Repository trait for AuthToken persistence operations
///
/// An account owns at most one token. Implementations must keep that true
/// under concurrent logins of the same account.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Return the account's token, creating it if none exists
    ///
    /// # Returns
    /// * `Ok((AuthToken, true))` - A new token was created
    /// * `Ok((AuthToken, false))` - The existing token was returned
    async fn get_or_create(&self, account_id: Uuid) -> Result<(AuthToken, bool), DomainError>;

    /// Look up a token by its key
    async fn find_by_key(&self, key: &str) -> Result<Option<AuthToken>, DomainError>;

    /// Delete the account's token
    ///
    /// # Returns
    /// * `Ok(true)` - A token was deleted
    /// * `Ok(false)` - The account had no token
    async fn delete_for_account(&self, account_id: Uuid) -> Result<bool, DomainError>;
}
