//! In-memory implementation of TokenRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::AuthToken;
use crate::errors::DomainError;

use super::trait_::TokenRepository;

/// Token store keyed by account id
#[derive(Clone, Default)]
pub struct InMemoryTokenRepository {
    tokens: Arc<RwLock<HashMap<Uuid, AuthToken>>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.tokens.read().await.len()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn get_or_create(&self, account_id: Uuid) -> Result<(AuthToken, bool), DomainError> {
        let mut tokens = self.tokens.write().await;
        if let Some(existing) = tokens.get(&account_id) {
            return Ok((existing.clone(), false));
        }

        let token = AuthToken::new(account_id);
        tokens.insert(account_id, token.clone());
        Ok((token, true))
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<AuthToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.values().find(|t| t.key == key).cloned())
    }

    async fn delete_for_account(&self, account_id: Uuid) -> Result<bool, DomainError> {
        Ok(self.tokens.write().await.remove(&account_id).is_some())
    }
}
