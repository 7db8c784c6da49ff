//! Unit tests for the in-memory song repository

use crate::domain::entities::{Album, Song, Tag};
use crate::repositories::song::{InMemorySongRepository, SongRepository};

#[tokio::test]
async fn test_insert_and_find() {
    let repo = InMemorySongRepository::new();
    repo.insert(Song {
        id: 3,
        title: "Night Drive".to_string(),
        url: "https://cdn.example.com/3.mp3".to_string(),
        original_name: None,
        lyrics: None,
        album: Album {
            id: 1,
            code: "ALB-1".to_string(),
            title: "Roads".to_string(),
            year: 2021,
            thumbnail300x300: None,
            thumbnail1200x1200: None,
        },
        tags: vec![Tag {
            id: 1,
            name: "synth".to_string(),
        }],
        artists: vec![],
    })
    .await;

    let song = repo.find_by_id(3).await.unwrap().unwrap();
    assert_eq!(song.album.code, "ALB-1");
    assert_eq!(song.tags.len(), 1);
    assert!(repo.find_by_id(4).await.unwrap().is_none());
}
