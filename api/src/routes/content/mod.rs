//! Catalog content route handlers

pub mod history;
pub mod songs;

pub use history::list_history;
pub use songs::retrieve_song;
