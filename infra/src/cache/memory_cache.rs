//! In-process TTL cache

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use catalog_core::OtpCacheTrait;

/// Map of values with per-entry deadlines
///
/// Expired entries read as absent. They are dropped when read and swept on
/// every `set`, so the map holds at most the live entries plus one. Deadlines
/// use `tokio::time::Instant`, so a paused test clock controls expiry.
#[derive(Clone, Default)]
pub struct InMemoryTtlCache {
    entries: Arc<Mutex<HashMap<String, (String, Instant)>>>,
}

impl InMemoryTtlCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every expired entry, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        sweep(&mut *self.entries.lock().await, Instant::now())
    }

    /// Number of stored entries, expired ones included until purged
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl OtpCacheTrait for InMemoryTtlCache {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some((value, deadline)) if *deadline > Instant::now() => Ok(Some(value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        let swept = sweep(&mut entries, now);
        if swept > 0 {
            tracing::debug!(swept, event = "otp_cache_swept", "Dropped expired cache entries");
        }
        entries.insert(
            key.to_string(),
            (value.to_string(), now + Duration::from_secs(ttl_seconds)),
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        let mut entries = self.entries.lock().await;
        Ok(matches!(entries.remove(key), Some((_, deadline)) if deadline > Instant::now()))
    }
}

fn sweep(entries: &mut HashMap<String, (String, Instant)>, now: Instant) -> usize {
    let before = entries.len();
    entries.retain(|_, (_, deadline)| *deadline > now);
    before - entries.len()
}
