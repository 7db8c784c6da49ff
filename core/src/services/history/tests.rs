use std::sync::Arc;
use uuid::Uuid;

use crate::repositories::{InMemoryPlayHistoryRepository, PlayHistoryRepository};
use crate::services::history::HistoryService;

#[tokio::test]
async fn test_record_access_counts_and_lists() {
    let repo = Arc::new(InMemoryPlayHistoryRepository::new());
    let history = HistoryService::new(repo.clone());
    let account_id = Uuid::new_v4();

    history.record_access(account_id, 1).await.unwrap();
    history.record_access(account_id, 2).await.unwrap();
    let record = history.record_access(account_id, 1).await.unwrap();
    assert_eq!(record.count, 2);

    let listed = history.list_history(account_id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].song_id, 1);
    assert!(history.list_history(Uuid::new_v4()).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_record_access_counts_every_call() {
    let repo = Arc::new(InMemoryPlayHistoryRepository::new());
    let history = Arc::new(HistoryService::new(repo.clone()));
    let account_id = Uuid::new_v4();

    let handles: Vec<_> = (0..100)
        .map(|_| {
            let history = history.clone();
            tokio::spawn(async move { history.record_access(account_id, 42).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let record = repo.find(account_id, 42).await.unwrap().unwrap();
    assert_eq!(record.count, 100);
}
