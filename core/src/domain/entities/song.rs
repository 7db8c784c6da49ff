//! Read-only catalog entities

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub year: i32,
    pub thumbnail300x300: Option<String>,
    pub thumbnail1200x1200: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub thumbnail300x300: Option<String>,
    pub thumbnail1200x1200: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Song with its album, tags and artists resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub original_name: Option<String>,
    pub lyrics: Option<String>,
    pub album: Album,
    pub tags: Vec<Tag>,
    pub artists: Vec<Artist>,
}
