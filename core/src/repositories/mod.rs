pub mod account;
pub mod play_history;
pub mod song;
pub mod token;

pub use account::{AccountRepository, InMemoryAccountRepository};
pub use play_history::{InMemoryPlayHistoryRepository, PlayHistoryRepository};
pub use song::{InMemorySongRepository, SongRepository};
pub use token::{InMemoryTokenRepository, TokenRepository};
