//! MySQL implementation of the PlayHistoryRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use catalog_core::domain::entities::PlayHistoryRecord;
use catalog_core::errors::DomainError;
use catalog_core::repositories::PlayHistoryRepository;

use super::{db_error, is_deadlock, parse_uuid};

const MAX_DEADLOCK_RETRIES: u32 = 5;

/// MySQL implementation of PlayHistoryRepository
///
/// Increments happen inside the database with `ON DUPLICATE KEY UPDATE`,
/// so concurrent retrievals of the same pair never overwrite each other.
pub struct MySqlPlayHistoryRepository {
    pool: MySqlPool,
}

impl MySqlPlayHistoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &MySqlRow) -> Result<PlayHistoryRecord, DomainError> {
        let get_err = |e: sqlx::Error| db_error("Failed to decode play history row", e);
        let account_id: String = row.try_get("account_id").map_err(get_err)?;

        Ok(PlayHistoryRecord {
            account_id: parse_uuid("play_history.account_id", &account_id)?,
            song_id: row.try_get("song_id").map_err(get_err)?,
            accessed_at: row.try_get::<DateTime<Utc>, _>("accessed_at").map_err(get_err)?,
            count: row.try_get::<u64, _>("count").map_err(get_err)?,
        })
    }

    /// Increment inside one transaction and read the row back
    async fn try_upsert(
        &self,
        account_id: Uuid,
        song_id: i64,
        accessed_at: DateTime<Utc>,
    ) -> Result<MySqlRow, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO play_history (account_id, song_id, accessed_at, count)
            VALUES (?, ?, ?, 1)
            ON DUPLICATE KEY UPDATE count = count + 1, accessed_at = VALUES(accessed_at)
            "#,
        )
        .bind(account_id.to_string())
        .bind(song_id)
        .bind(accessed_at)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query(
            "SELECT account_id, song_id, accessed_at, count FROM play_history \
             WHERE account_id = ? AND song_id = ?",
        )
        .bind(account_id.to_string())
        .bind(song_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }
}

#[async_trait]
impl PlayHistoryRepository for MySqlPlayHistoryRepository {
    async fn upsert_increment(
        &self,
        account_id: Uuid,
        song_id: i64,
        accessed_at: DateTime<Utc>,
    ) -> Result<PlayHistoryRecord, DomainError> {
        let mut attempt = 0;
        loop {
            match self.try_upsert(account_id, song_id, accessed_at).await {
                Err(e) if is_deadlock(&e) && attempt < MAX_DEADLOCK_RETRIES => {
                    attempt += 1;
                    tracing::warn!(
                        account_id = %account_id,
                        song_id,
                        attempt,
                        "Deadlock on play history upsert, retrying"
                    );
                }
                Err(e) => return Err(db_error("Failed to record play history", e)),
                Ok(row) => return Self::row_to_record(&row),
            }
        }
    }

    async fn find(
        &self,
        account_id: Uuid,
        song_id: i64,
    ) -> Result<Option<PlayHistoryRecord>, DomainError> {
        let row = sqlx::query(
            "SELECT account_id, song_id, accessed_at, count FROM play_history \
             WHERE account_id = ? AND song_id = ?",
        )
        .bind(account_id.to_string())
        .bind(song_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find play history", e))?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    async fn list_for_account(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<PlayHistoryRecord>, DomainError> {
        let rows = sqlx::query(
            "SELECT account_id, song_id, accessed_at, count FROM play_history \
             WHERE account_id = ? ORDER BY accessed_at DESC",
        )
        .bind(account_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list play history", e))?;

        rows.iter().map(Self::row_to_record).collect()
    }
}
