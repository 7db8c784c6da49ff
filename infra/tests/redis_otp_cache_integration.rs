//! Integration tests for the Redis-backed OTP cache

use std::sync::Arc;

use catalog_core::services::{IssuePolicy, OtpCacheTrait, OtpService, OtpServiceConfig};
use catalog_infra::cache::{CacheConfig, RedisClient, RedisOtpCache};

fn redis_url() -> String {
    std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
}

async fn connect(prefix: &str) -> RedisClient {
    let config = CacheConfig::new(redis_url()).with_prefix(prefix);
    RedisClient::new(config)
        .await
        .expect("Failed to create Redis client")
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_redis_cache_set_get_delete() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let cache = RedisOtpCache::new(connect("catalog-it").await);
    let key = format!("otp:{}@example.com", uuid::Uuid::new_v4());

    cache.set(&key, "ABC123", 60).await.unwrap();
    assert_eq!(cache.get(&key).await.unwrap(), Some("ABC123".to_string()));

    cache.set(&key, "XYZ789", 60).await.unwrap();
    assert_eq!(cache.get(&key).await.unwrap(), Some("XYZ789".to_string()));

    assert!(cache.delete(&key).await.unwrap());
    assert_eq!(cache.get(&key).await.unwrap(), None);

    // Deleting again is not an error
    assert!(!cache.delete(&key).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_redis_entries_carry_ttl() {
    let client = connect("catalog-it").await;
    let key = format!("ttl-{}", uuid::Uuid::new_v4());

    client.set_with_expiry(&key, "value", 120).await.unwrap();
    let ttl = client.ttl(&key).await.unwrap().expect("key should have a ttl");
    assert!(ttl > 0 && ttl <= 120);

    assert!(client.delete(&key).await.unwrap());
    assert_eq!(client.ttl(&key).await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_otp_service_over_redis() {
    let cache = Arc::new(RedisOtpCache::new(connect("catalog-it").await));
    let service = OtpService::new(
        cache,
        OtpServiceConfig {
            echo_enabled: true,
            ..OtpServiceConfig::default()
        },
    );
    let email = format!("{}@example.com", uuid::Uuid::new_v4().simple());

    let issued = service.issue(&email, IssuePolicy::CheckExisting).await.unwrap();
    assert!(service
        .issue(&email, IssuePolicy::CheckExisting)
        .await
        .is_err());

    service.check(&email, &issued.code).await.unwrap();
    assert!(service.invalidate(&email).await.unwrap());
    assert!(service.check(&email, &issued.code).await.is_err());
}
