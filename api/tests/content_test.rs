//! Integration tests for song retrieval and play history

#[macro_use]
mod common;

use actix_web::{test, web};
use catalog_api::app::create_app;
use catalog_api::backend::{build_memory_state, memory_catalog, seed_catalog};
use catalog_core::repositories::{InMemorySongRepository, SongRepository};
use catalog_shared::{Environment, ServerConfig};
use serde_json::Value;

#[actix_web::test]
async fn test_anonymous_read_records_nothing() {
    let app = test::init_service(create_app(
        common::memory_state().await,
        &ServerConfig::default(),
        Environment::Development,
    ))
    .await;

    let req = test::TestRequest::get().uri("/content/songs/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let song: Value = test::read_body_json(resp).await;
    assert_eq!(song["title"], "Midnight Run");
    assert_eq!(song["album"]["title"], "Night Roads");
    assert_eq!(song["tags"][0]["name"], "synthwave");
    assert_eq!(song["artists"][0]["name"], "The Late Shift");

    let token = active_user_token!(&app, "lurker");
    let req = common::with_token(test::TestRequest::get().uri("/content/history"), &token)
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(history, serde_json::json!([]));
}

#[actix_web::test]
async fn test_authenticated_reads_increment_history() {
    let app = test::init_service(create_app(
        common::memory_state().await,
        &ServerConfig::default(),
        Environment::Development,
    ))
    .await;
    let token = active_user_token!(&app, "fan");

    for uri in ["/content/songs/1", "/content/songs/1", "/content/songs/2"] {
        let req = common::with_token(test::TestRequest::get().uri(uri), &token).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    let req = common::with_token(test::TestRequest::get().uri("/content/history"), &token)
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    // Most recent first
    assert_eq!(entries[0]["song_id"], 2);
    assert_eq!(entries[0]["count"], 1);
    assert_eq!(entries[1]["song_id"], 1);
    assert_eq!(entries[1]["count"], 2);
}

#[actix_web::test]
async fn test_missing_song_is_not_found() {
    let app = test::init_service(create_app(
        common::memory_state().await,
        &ServerConfig::default(),
        Environment::Development,
    ))
    .await;
    let token = active_user_token!(&app, "seeker");

    let req = common::with_token(test::TestRequest::get().uri("/content/songs/99"), &token)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = common::with_token(test::TestRequest::get().uri("/content/history"), &token)
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(history, serde_json::json!([]));
}

#[actix_web::test]
async fn test_bad_token_on_song_read_is_rejected() {
    let app = test::init_service(create_app(
        common::memory_state().await,
        &ServerConfig::default(),
        Environment::Development,
    ))
    .await;

    let req = common::with_token(test::TestRequest::get().uri("/content/songs/1"), "not-a-key")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_history_requires_auth() {
    let app = test::init_service(create_app(
        common::memory_state().await,
        &ServerConfig::default(),
        Environment::Development,
    ))
    .await;

    let req = test::TestRequest::get().uri("/content/history").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_memory_catalog_loads_seed_file() {
    let mut config = common::test_config();
    config.database.catalog_seed_file = Some(format!(
        "{}/../demos/catalog.json",
        env!("CARGO_MANIFEST_DIR")
    ));
    let songs = memory_catalog(&config).await.unwrap();
    let app = test::init_service(create_app(
        web::Data::new(build_memory_state(&config, songs)),
        &ServerConfig::default(),
        Environment::Development,
    ))
    .await;

    let req = test::TestRequest::get().uri("/content/songs/2").to_request();
    let song: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(song["title"], "Low Tide");
    assert_eq!(song["artists"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_memory_catalog_without_seed_is_empty() {
    let config = common::test_config();
    let songs = memory_catalog(&config).await.unwrap();
    assert!(songs.find_by_id(1).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_bad_seed_files_fail_startup() {
    let mut config = common::test_config();
    config.database.catalog_seed_file = Some("/nonexistent/catalog.json".to_string());
    assert!(memory_catalog(&config).await.is_err());

    let songs = InMemorySongRepository::new();
    assert!(seed_catalog(&songs, r#"[{"id": 1}]"#).await.is_err());
    assert_eq!(seed_catalog(&songs, "[]").await.unwrap(), 0);
}
