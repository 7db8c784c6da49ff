//! In-memory implementation of AccountRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::{DomainError, ValidationError};

use super::trait_::AccountRepository;

/// Account store backed by a map, for tests and the memory backend
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

fn duplicate(field: &str) -> DomainError {
    ValidationError::DuplicateValue {
        field: field.to_string(),
    }
    .into()
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.username == account.username) {
            return Err(duplicate("username"));
        }
        if accounts.values().any(|a| a.email == account.email) {
            return Err(duplicate("email"));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn save(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(&account.id) {
            Some(existing) => {
                *existing = account.clone();
                Ok(account)
            }
            None => Err(DomainError::not_found(format!("account {}", account.id))),
        }
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.email == email))
    }
}
