//! Account repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// Usernames and emails are unique. Implementations report a collision on
/// `create` as `ValidationError::DuplicateValue` naming the offending field,
/// so a race between the service's existence check and the insert still
/// surfaces as a validation failure.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by normalized email address
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Insert a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::ValidationErr(DuplicateValue))` - Username or email taken
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Persist changes to an existing account
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No account with this id
    async fn save(&self, account: Account) -> Result<Account, DomainError>;

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
