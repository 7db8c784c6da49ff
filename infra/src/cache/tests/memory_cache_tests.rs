//! Unit tests for the in-memory TTL cache

use std::time::Duration;

use catalog_core::OtpCacheTrait;

use crate::cache::InMemoryTtlCache;

#[tokio::test(start_paused = true)]
async fn test_entry_expires_after_ttl() {
    let cache = InMemoryTtlCache::new();
    cache.set("otp:a@example.com", "ABC123", 120).await.unwrap();

    tokio::time::advance(Duration::from_secs(119)).await;
    assert_eq!(cache.get("otp:a@example.com").await.unwrap(), Some("ABC123".to_string()));

    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(cache.get("otp:a@example.com").await.unwrap(), None);
    assert!(cache.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn test_set_replaces_value_and_deadline() {
    let cache = InMemoryTtlCache::new();
    cache.set("k", "first", 10).await.unwrap();
    tokio::time::advance(Duration::from_secs(8)).await;

    cache.set("k", "second", 10).await.unwrap();
    tokio::time::advance(Duration::from_secs(8)).await;
    assert_eq!(cache.get("k").await.unwrap(), Some("second".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_purge_expired() {
    let cache = InMemoryTtlCache::new();
    cache.set("short", "1", 5).await.unwrap();
    cache.set("long", "2", 500).await.unwrap();

    tokio::time::advance(Duration::from_secs(6)).await;
    assert_eq!(cache.purge_expired().await, 1);
    assert_eq!(cache.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_set_sweeps_expired_entries() {
    let cache = InMemoryTtlCache::new();
    for i in 0..1000 {
        cache
            .set(&format!("otp:user{}@example.com", i), "ABC123", 120)
            .await
            .unwrap();
    }
    assert_eq!(cache.len().await, 1000);

    tokio::time::advance(Duration::from_secs(3600)).await;
    cache.set("otp:late@example.com", "XYZ789", 120).await.unwrap();
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_delete_absent_key_is_ok() {
    let cache = InMemoryTtlCache::new();
    assert_eq!(cache.delete("missing").await, Ok(false));
}

#[tokio::test(start_paused = true)]
async fn test_delete_reports_live_entry_once() {
    let cache = InMemoryTtlCache::new();
    cache.set("live", "1", 60).await.unwrap();
    cache.set("stale", "2", 5).await.unwrap();
    tokio::time::advance(Duration::from_secs(10)).await;

    assert_eq!(cache.delete("live").await, Ok(true));
    assert_eq!(cache.delete("live").await, Ok(false));
    assert_eq!(cache.delete("stale").await, Ok(false));
}
