use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::PlayHistoryRecord;
use crate::errors::DomainResult;
use crate::repositories::PlayHistoryRepository;

/// Records and lists song retrievals per account
pub struct HistoryService<H: PlayHistoryRepository> {
    repository: Arc<H>,
}

impl<H: PlayHistoryRepository> HistoryService<H> {
    pub fn new(repository: Arc<H>) -> Self {
        Self { repository }
    }

    /// Count one retrieval of `song_id` by `account_id`
    ///
    /// A single atomic upsert: the first call creates the record with
    /// `count = 1`, later calls increment it and move `accessed_at`.
    pub async fn record_access(&self, account_id: Uuid, song_id: i64) -> DomainResult<PlayHistoryRecord> {
        let record = self
            .repository
            .upsert_increment(account_id, song_id, Utc::now())
            .await?;

        tracing::debug!(
            account_id = %account_id,
            song_id = song_id,
            count = record.count,
            event = "play_recorded",
            "Recorded song access"
        );

        Ok(record)
    }

    /// The account's history, most recent first
    pub async fn list_history(&self, account_id: Uuid) -> DomainResult<Vec<PlayHistoryRecord>> {
        self.repository.list_for_account(account_id).await
    }
}
