//! # Catalog Core
//!
//! Core business logic and domain layer for the song catalog backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Account, Album, Artist, AuthToken, PlayHistoryRecord, Song, Tag};
pub use domain::value_objects::{AccountProfile, LoginResult, LogoutOutcome, RegistrationResult};
pub use errors::{AuthError, DomainError, DomainResult, ValidationError};
pub use repositories::{
    AccountRepository, InMemoryAccountRepository, InMemoryPlayHistoryRepository,
    InMemorySongRepository, InMemoryTokenRepository, PlayHistoryRepository, SongRepository,
    TokenRepository,
};
pub use services::{
    AuthService, AuthServiceConfig, CatalogService, HistoryService, IssuePolicy, IssuedOtp,
    OtpCacheTrait, OtpNotifier, OtpService, OtpServiceConfig, RegistrationRequest,
};
