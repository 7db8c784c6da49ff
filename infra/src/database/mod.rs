//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and embedded migrations
//! - Repository implementations for accounts, tokens, songs and play history

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    MySqlAccountRepository, MySqlPlayHistoryRepository, MySqlSongRepository, MySqlTokenRepository,
};
