use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Song;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{PlayHistoryRepository, SongRepository};
use crate::services::history::HistoryService;

/// Song lookups
pub struct CatalogService<S: SongRepository, H: PlayHistoryRepository> {
    songs: Arc<S>,
    history: Arc<HistoryService<H>>,
}

impl<S: SongRepository, H: PlayHistoryRepository> CatalogService<S, H> {
    pub fn new(songs: Arc<S>, history: Arc<HistoryService<H>>) -> Self {
        Self { songs, history }
    }

    /// Load a song; when `viewer` is set, count the retrieval in their history
    ///
    /// This read has a write side effect for authenticated viewers. A failed
    /// history write fails the whole retrieval so counts never drift from
    /// the retrievals that were served.
    pub async fn retrieve_song(&self, song_id: i64, viewer: Option<Uuid>) -> DomainResult<Song> {
        let song = self
            .songs
            .find_by_id(song_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("song {}", song_id)))?;

        if let Some(account_id) = viewer {
            self.history.record_access(account_id, song.id).await?;
        }

        Ok(song)
    }
}
