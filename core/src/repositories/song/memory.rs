//! In-memory implementation of SongRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Song;
use crate::errors::DomainError;

use super::trait_::SongRepository;

/// Catalog held in memory; songs are seeded with [`InMemorySongRepository::insert`]
#[derive(Clone, Default)]
pub struct InMemorySongRepository {
    songs: Arc<RwLock<HashMap<i64, Song>>>,
}

impl InMemorySongRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, song: Song) {
        self.songs.write().await.insert(song.id, song);
    }
}

#[async_trait]
impl SongRepository for InMemorySongRepository {
    async fn find_by_id(&self, song_id: i64) -> Result<Option<Song>, DomainError> {
        Ok(self.songs.read().await.get(&song_id).cloned())
    }
}
