use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Album, Artist, Song};
use crate::errors::DomainError;
use crate::repositories::{InMemoryPlayHistoryRepository, InMemorySongRepository, PlayHistoryRepository};
use crate::services::catalog::CatalogService;
use crate::services::history::HistoryService;

fn song(id: i64) -> Song {
    Song {
        id,
        title: "Harbor Lights".to_string(),
        url: format!("https://cdn.example.com/{}.mp3", id),
        original_name: Some("harbor_lights_master.wav".to_string()),
        lyrics: None,
        album: Album {
            id: 10,
            code: "HL-01".to_string(),
            title: "Harbor".to_string(),
            year: 2019,
            thumbnail300x300: None,
            thumbnail1200x1200: None,
        },
        tags: vec![],
        artists: vec![Artist {
            id: 5,
            name: "The Quays".to_string(),
            thumbnail300x300: None,
            thumbnail1200x1200: None,
        }],
    }
}

async fn setup() -> (
    CatalogService<InMemorySongRepository, InMemoryPlayHistoryRepository>,
    Arc<InMemoryPlayHistoryRepository>,
) {
    let songs = Arc::new(InMemorySongRepository::new());
    songs.insert(song(1)).await;
    let plays = Arc::new(InMemoryPlayHistoryRepository::new());
    let history = Arc::new(HistoryService::new(plays.clone()));
    (CatalogService::new(songs, history), plays)
}

#[tokio::test]
async fn test_anonymous_retrieval_records_nothing() {
    let (catalog, plays) = setup().await;

    let found = catalog.retrieve_song(1, None).await.unwrap();
    assert_eq!(found.artists[0].name, "The Quays");
    assert_eq!(plays.count().await, 0);
}

#[tokio::test]
async fn test_authenticated_retrieval_counts() {
    let (catalog, plays) = setup().await;
    let viewer = Uuid::new_v4();

    catalog.retrieve_song(1, Some(viewer)).await.unwrap();
    catalog.retrieve_song(1, Some(viewer)).await.unwrap();

    let record = plays.find(viewer, 1).await.unwrap().unwrap();
    assert_eq!(record.count, 2);
}

#[tokio::test]
async fn test_missing_song_is_not_found_and_not_recorded() {
    let (catalog, plays) = setup().await;

    let err = catalog.retrieve_song(99, Some(Uuid::new_v4())).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    assert_eq!(plays.count().await, 0);
}
