//! Domain entities representing core business objects.

pub mod account;
pub mod auth_token;
pub mod play_history;
pub mod song;

// Re-export commonly used types
pub use account::Account;
pub use auth_token::{AuthToken, TOKEN_KEY_BYTES, TOKEN_KEY_LENGTH};
pub use play_history::PlayHistoryRecord;
pub use song::{Album, Artist, Song, Tag};
