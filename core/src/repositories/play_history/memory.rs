//! In-memory implementation of PlayHistoryRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::PlayHistoryRecord;
use crate::errors::DomainError;

use super::trait_::PlayHistoryRepository;

/// Play counters keyed by (account, song)
///
/// The whole read-modify-write of an upsert runs under one write lock.
#[derive(Clone, Default)]
pub struct InMemoryPlayHistoryRepository {
    records: Arc<RwLock<HashMap<(Uuid, i64), PlayHistoryRecord>>>,
}

impl InMemoryPlayHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl PlayHistoryRepository for InMemoryPlayHistoryRepository {
    async fn upsert_increment(
        &self,
        account_id: Uuid,
        song_id: i64,
        accessed_at: DateTime<Utc>,
    ) -> Result<PlayHistoryRecord, DomainError> {
        let mut records = self.records.write().await;
        let record = records
            .entry((account_id, song_id))
            .and_modify(|r| r.register_access(accessed_at))
            .or_insert_with(|| PlayHistoryRecord::first_access(account_id, song_id, accessed_at));
        Ok(record.clone())
    }

    async fn find(
        &self,
        account_id: Uuid,
        song_id: i64,
    ) -> Result<Option<PlayHistoryRecord>, DomainError> {
        Ok(self.records.read().await.get(&(account_id, song_id)).cloned())
    }

    async fn list_for_account(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<PlayHistoryRecord>, DomainError> {
        let records = self.records.read().await;
        let mut owned: Vec<_> = records
            .values()
            .filter(|r| r.account_id == account_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.accessed_at.cmp(&a.accessed_at));
        Ok(owned)
    }
}
