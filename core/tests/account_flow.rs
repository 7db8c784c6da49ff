//! End-to-end account and play history flow through the public API

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use catalog_core::{
    Album, AuthService, AuthServiceConfig, CatalogService, HistoryService,
    InMemoryAccountRepository, InMemoryPlayHistoryRepository, InMemorySongRepository,
    InMemoryTokenRepository, OtpCacheTrait, OtpNotifier, OtpService, OtpServiceConfig,
    PlayHistoryRepository, RegistrationRequest, Song,
};

#[derive(Default)]
struct MapCache(Mutex<HashMap<String, String>>);

#[async_trait]
impl OtpCacheTrait for MapCache {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.0.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str, _ttl_seconds: u64) -> Result<(), String> {
        self.0.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        Ok(self.0.lock().unwrap().remove(key).is_some())
    }
}

#[derive(Default)]
struct Outbox(Mutex<Vec<(String, String)>>);

#[async_trait]
impl OtpNotifier for Outbox {
    async fn deliver(&self, email: &str, code: &str) -> Result<(), String> {
        self.0.lock().unwrap().push((email.to_string(), code.to_string()));
        Ok(())
    }
}

#[tokio::test]
async fn test_register_activate_login_listen_logout() {
    let outbox = Arc::new(Outbox::default());
    let otp = Arc::new(OtpService::new(
        Arc::new(MapCache::default()),
        OtpServiceConfig::default(),
    ));
    let auth = AuthService::new(
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(InMemoryTokenRepository::new()),
        otp,
        outbox.clone(),
        AuthServiceConfig {
            bcrypt_cost: 4,
            ..Default::default()
        },
    );

    let songs = Arc::new(InMemorySongRepository::new());
    songs
        .insert(Song {
            id: 1,
            title: "Opening".to_string(),
            url: "https://cdn.example.com/1.mp3".to_string(),
            original_name: None,
            lyrics: Some("la la".to_string()),
            album: Album {
                id: 1,
                code: "A1".to_string(),
                title: "First".to_string(),
                year: 2020,
                thumbnail300x300: None,
                thumbnail1200x1200: None,
            },
            tags: vec![],
            artists: vec![],
        })
        .await;
    let plays = Arc::new(InMemoryPlayHistoryRepository::new());
    let catalog = CatalogService::new(songs, Arc::new(HistoryService::new(plays.clone())));

    let registered = auth
        .register(RegistrationRequest {
            username: "listener".to_string(),
            email: "listener@example.com".to_string(),
            password: "Quiet-Harbor-77".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(!registered.profile.is_active);

    let code = outbox.0.lock().unwrap().last().unwrap().1.clone();
    auth.verify_and_activate("listener@example.com", &code).await.unwrap();

    let login = auth.login("listener", "Quiet-Harbor-77").await.unwrap();
    let viewer = auth
        .authenticate_token(&login.token.key)
        .await
        .unwrap()
        .expect("token should resolve");

    catalog.retrieve_song(1, Some(viewer.id)).await.unwrap();
    catalog.retrieve_song(1, None).await.unwrap();
    assert_eq!(plays.find(viewer.id, 1).await.unwrap().unwrap().count, 1);

    auth.logout(viewer.id, true).await.unwrap();
    assert!(auth.authenticate_token(&login.token.key).await.unwrap().is_none());
}
