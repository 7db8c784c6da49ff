//! Song repository trait for catalog reads

use async_trait::async_trait;

use crate::domain::entities::Song;
use crate::errors::DomainError;

#[async_trait]
pub trait SongRepository: Send + Sync {
    /// Load a song with its album, tags and artists
    async fn find_by_id(&self, song_id: i64) -> Result<Option<Song>, DomainError>;
}
