//! Play history repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::PlayHistoryRecord;
use crate::errors::DomainError;

/// Repository trait for per-(account, song) play counters
#[async_trait]
pub trait PlayHistoryRepository: Send + Sync {
    /// Atomically create the record with `count = 1` or increment it
    ///
    /// Concurrent calls for the same pair must never lose an increment.
    ///
    /// # Returns
    /// The record as it stands after this call
    async fn upsert_increment(
        &self,
        account_id: Uuid,
        song_id: i64,
        accessed_at: DateTime<Utc>,
    ) -> Result<PlayHistoryRecord, DomainError>;

    async fn find(
        &self,
        account_id: Uuid,
        song_id: i64,
    ) -> Result<Option<PlayHistoryRecord>, DomainError>;

    /// All records of an account, most recently accessed first
    async fn list_for_account(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<PlayHistoryRecord>, DomainError>;
}
