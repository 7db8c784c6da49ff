//! Shared fixtures for the API integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{http::header, test::TestRequest, web};
use serde_json::json;

use catalog_api::backend::{build_memory_state, MemoryBackend};
use catalog_api::routes::AppState;
use catalog_core::domain::entities::{Album, Artist, Song, Tag};
use catalog_core::repositories::InMemorySongRepository;
use catalog_shared::{AppConfig, DataBackend};

pub const PASSWORD: &str = "Tr0ub4dor&3x!";

/// Memory backend, OTP echo on, cheap bcrypt
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.backend = DataBackend::Memory;
    config.otp.debug = true;
    config.auth.bcrypt_cost = 4;
    config
}

pub fn sample_song(id: i64) -> Song {
    Song {
        id,
        title: "Midnight Run".to_string(),
        url: format!("https://cdn.example.com/songs/{}.mp3", id),
        original_name: Some("midnight_run_master.wav".to_string()),
        lyrics: None,
        album: Album {
            id: 10,
            code: "NR-2019".to_string(),
            title: "Night Roads".to_string(),
            year: 2019,
            thumbnail300x300: None,
            thumbnail1200x1200: None,
        },
        tags: vec![Tag {
            id: 3,
            name: "synthwave".to_string(),
        }],
        artists: vec![Artist {
            id: 5,
            name: "The Late Shift".to_string(),
            thumbnail300x300: None,
            thumbnail1200x1200: None,
        }],
    }
}

/// State with songs 1 and 2 in the catalog
pub async fn memory_state() -> web::Data<AppState<MemoryBackend>> {
    let songs = Arc::new(InMemorySongRepository::new());
    songs.insert(sample_song(1)).await;
    songs.insert(sample_song(2)).await;
    web::Data::new(build_memory_state(&test_config(), songs))
}

pub fn register_request(username: &str) -> TestRequest {
    TestRequest::post().uri("/auth/register").set_json(json!({
        "username": username,
        "email": format!("{}@example.com", username),
        "password": PASSWORD,
        "first_name": "Sam",
        "last_name": "Rivera",
    }))
}

pub fn verify_request(username: &str, otp: &str) -> TestRequest {
    TestRequest::post()
        .uri("/auth/verify-email-and-activate-account")
        .set_json(json!({
            "email": format!("{}@example.com", username),
            "otp": otp,
        }))
}

pub fn login_request(username: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/auth/username/login")
        .set_json(json!({ "username": username, "password": password }))
}

pub fn with_token(request: TestRequest, token: &str) -> TestRequest {
    request.insert_header((header::AUTHORIZATION, format!("Token {}", token)))
}

/// Register, activate and log in; evaluates to the token key
macro_rules! active_user_token {
    ($app:expr, $username:expr) => {{
        let registered: serde_json::Value = actix_web::test::call_and_read_body_json(
            $app,
            common::register_request($username).to_request(),
        )
        .await;
        let otp = registered["otp"].as_str().expect("otp echoed").to_string();

        let resp = actix_web::test::call_service(
            $app,
            common::verify_request($username, &otp).to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let login: serde_json::Value = actix_web::test::call_and_read_body_json(
            $app,
            common::login_request($username, common::PASSWORD).to_request(),
        )
        .await;
        login["token"].as_str().expect("token").to_string()
    }};
}
