//! Unit tests for the in-memory play history repository

use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::repositories::play_history::{InMemoryPlayHistoryRepository, PlayHistoryRepository};

#[tokio::test]
async fn test_upsert_creates_then_increments() {
    let repo = InMemoryPlayHistoryRepository::new();
    let account_id = Uuid::new_v4();
    let first = Utc::now();

    let record = repo.upsert_increment(account_id, 1, first).await.unwrap();
    assert_eq!(record.count, 1);
    assert_eq!(record.accessed_at, first);

    let second = first + Duration::seconds(5);
    let record = repo.upsert_increment(account_id, 1, second).await.unwrap();
    assert_eq!(record.count, 2);
    assert_eq!(record.accessed_at, second);
    assert_eq!(repo.count().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_upserts_lose_no_updates() {
    let repo = Arc::new(InMemoryPlayHistoryRepository::new());
    let account_id = Uuid::new_v4();

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.upsert_increment(account_id, 9, Utc::now()).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let record = repo.find(account_id, 9).await.unwrap().unwrap();
    assert_eq!(record.count, 50);
}

#[tokio::test]
async fn test_list_for_account_orders_by_recency() {
    let repo = InMemoryPlayHistoryRepository::new();
    let account_id = Uuid::new_v4();
    let other = Uuid::new_v4();
    let base = Utc::now();

    repo.upsert_increment(account_id, 1, base).await.unwrap();
    repo.upsert_increment(account_id, 2, base + Duration::seconds(10)).await.unwrap();
    repo.upsert_increment(other, 3, base).await.unwrap();

    let listed = repo.list_for_account(account_id).await.unwrap();
    let song_ids: Vec<i64> = listed.iter().map(|r| r.song_id).collect();
    assert_eq!(song_ids, vec![2, 1]);
}
