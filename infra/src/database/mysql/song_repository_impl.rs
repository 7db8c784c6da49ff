//! MySQL implementation of the SongRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use catalog_core::domain::entities::{Album, Artist, Song, Tag};
use catalog_core::errors::DomainError;
use catalog_core::repositories::SongRepository;

use super::db_error;

/// MySQL implementation of SongRepository
pub struct MySqlSongRepository {
    pool: MySqlPool,
}

impl MySqlSongRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn tags_of(&self, song_id: i64) -> Result<Vec<Tag>, DomainError> {
        let rows = sqlx::query(
            "SELECT t.id, t.name FROM tags t \
             JOIN song_tags st ON st.tag_id = t.id \
             WHERE st.song_id = ? ORDER BY t.id",
        )
        .bind(song_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load song tags", e))?;

        rows.iter()
            .map(|row| -> Result<Tag, sqlx::Error> {
                Ok(Tag {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| db_error("Failed to decode tag row", e))
    }

    async fn artists_of(&self, song_id: i64) -> Result<Vec<Artist>, DomainError> {
        let rows = sqlx::query(
            "SELECT a.id, a.name, a.thumbnail300x300, a.thumbnail1200x1200 FROM artists a \
             JOIN song_artists sa ON sa.artist_id = a.id \
             WHERE sa.song_id = ? ORDER BY a.id",
        )
        .bind(song_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load song artists", e))?;

        rows.iter()
            .map(|row| -> Result<Artist, sqlx::Error> {
                Ok(Artist {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    thumbnail300x300: row.try_get("thumbnail300x300")?,
                    thumbnail1200x1200: row.try_get("thumbnail1200x1200")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| db_error("Failed to decode artist row", e))
    }
}

#[async_trait]
impl SongRepository for MySqlSongRepository {
    async fn find_by_id(&self, song_id: i64) -> Result<Option<Song>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT s.id, s.title, s.url, s.original_name, s.lyrics,
                   al.id AS album_id, al.code AS album_code, al.title AS album_title,
                   al.year AS album_year, al.thumbnail300x300 AS album_thumb_small,
                   al.thumbnail1200x1200 AS album_thumb_large
            FROM songs s
            JOIN albums al ON al.id = s.album_id
            WHERE s.id = ?
            "#,
        )
        .bind(song_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find song", e))?;

        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let decode = |row: &sqlx::mysql::MySqlRow| -> Result<(Song, i64), sqlx::Error> {
            let id: i64 = row.try_get("id")?;
            let song = Song {
                id,
                title: row.try_get("title")?,
                url: row.try_get("url")?,
                original_name: row.try_get("original_name")?,
                lyrics: row.try_get("lyrics")?,
                album: Album {
                    id: row.try_get("album_id")?,
                    code: row.try_get("album_code")?,
                    title: row.try_get("album_title")?,
                    year: row.try_get("album_year")?,
                    thumbnail300x300: row.try_get("album_thumb_small")?,
                    thumbnail1200x1200: row.try_get("album_thumb_large")?,
                },
                tags: Vec::new(),
                artists: Vec::new(),
            };
            Ok((song, id))
        };
        let (mut song, id) = decode(&row).map_err(|e| db_error("Failed to decode song row", e))?;

        song.tags = self.tags_of(id).await?;
        song.artists = self.artists_of(id).await?;
        Ok(Some(song))
    }
}
