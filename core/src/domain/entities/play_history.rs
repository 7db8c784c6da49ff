//! Per-(account, song) play counter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How many times an account has retrieved a song, and when it last did
///
/// There is at most one record per `(account_id, song_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayHistoryRecord {
    pub account_id: Uuid,
    pub song_id: i64,
    pub accessed_at: DateTime<Utc>,
    pub count: u64,
}

impl PlayHistoryRecord {
    /// Record for the very first retrieval
    pub fn first_access(account_id: Uuid, song_id: i64, accessed_at: DateTime<Utc>) -> Self {
        Self {
            account_id,
            song_id,
            accessed_at,
            count: 1,
        }
    }

    /// Applies one more retrieval
    pub fn register_access(&mut self, accessed_at: DateTime<Utc>) {
        self.count += 1;
        self.accessed_at = accessed_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_register_access_increments_and_moves_timestamp() {
        let start = Utc::now();
        let mut record = PlayHistoryRecord::first_access(Uuid::new_v4(), 7, start);
        assert_eq!(record.count, 1);

        let later = start + Duration::seconds(30);
        record.register_access(later);
        assert_eq!(record.count, 2);
        assert_eq!(record.accessed_at, later);
    }
}
