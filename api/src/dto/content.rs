use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::domain::entities::PlayHistoryRecord;

/// One entry of the caller's listen history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub song_id: i64,
    pub accessed_at: DateTime<Utc>,
    pub count: u64,
}

impl From<PlayHistoryRecord> for HistoryEntry {
    fn from(record: PlayHistoryRecord) -> Self {
        Self {
            song_id: record.song_id,
            accessed_at: record.accessed_at,
            count: record.count,
        }
    }
}
