//! Unit tests for the in-memory account repository

use crate::domain::entities::Account;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::account::{AccountRepository, InMemoryAccountRepository};

fn account(username: &str, email: &str) -> Account {
    Account::new(
        username.to_string(),
        email.to_string(),
        "hash".to_string(),
        String::new(),
        String::new(),
    )
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryAccountRepository::new();
    let created = repo.create(account("alice", "alice@example.com")).await.unwrap();

    let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "alice");

    let by_username = repo.find_by_username("alice").await.unwrap();
    assert_eq!(by_username.map(|a| a.id), Some(created.id));

    let by_email = repo.find_by_email("alice@example.com").await.unwrap();
    assert_eq!(by_email.map(|a| a.id), Some(created.id));

    assert!(repo.exists_by_username("alice").await.unwrap());
    assert!(!repo.exists_by_email("bob@example.com").await.unwrap());
}

#[tokio::test]
async fn test_duplicate_username_and_email() {
    let repo = InMemoryAccountRepository::new();
    repo.create(account("alice", "alice@example.com")).await.unwrap();

    let err = repo.create(account("alice", "other@example.com")).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::DuplicateValue { ref field }) if field == "username"
    ));

    let err = repo.create(account("bob", "alice@example.com")).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::DuplicateValue { ref field }) if field == "email"
    ));
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_save_updates_existing_and_rejects_unknown() {
    let repo = InMemoryAccountRepository::new();
    let mut stored = repo.create(account("alice", "alice@example.com")).await.unwrap();

    stored.activate();
    repo.save(stored.clone()).await.unwrap();
    assert!(repo.find_by_id(stored.id).await.unwrap().unwrap().is_active);

    let stranger = account("carol", "carol@example.com");
    let err = repo.save(stranger).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}
