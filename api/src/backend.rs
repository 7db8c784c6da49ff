//! Storage backends and service wiring
//!
//! `DATA_BACKEND=mysql` runs on MySQL and Redis; `DATA_BACKEND=memory`
//! keeps everything in process, for local runs and tests.

use std::sync::Arc;

use anyhow::Context;

use catalog_core::domain::entities::Song;
use catalog_core::repositories::{
    InMemoryAccountRepository, InMemoryPlayHistoryRepository, InMemorySongRepository,
    InMemoryTokenRepository,
};
use catalog_core::services::{
    AuthService, AuthServiceConfig, CatalogService, HistoryService, OtpService, OtpServiceConfig,
};
use catalog_infra::cache::{InMemoryTtlCache, RedisClient, RedisOtpCache};
use catalog_infra::database::{
    DatabasePool, MySqlAccountRepository, MySqlPlayHistoryRepository, MySqlSongRepository,
    MySqlTokenRepository,
};
use catalog_infra::notify::LogOtpNotifier;
use catalog_shared::AppConfig;

use crate::routes::{AppState, Backend};

/// Everything in process memory
pub struct MemoryBackend;

impl Backend for MemoryBackend {
    type Accounts = InMemoryAccountRepository;
    type Tokens = InMemoryTokenRepository;
    type OtpCache = InMemoryTtlCache;
    type Notifier = LogOtpNotifier;
    type Songs = InMemorySongRepository;
    type History = InMemoryPlayHistoryRepository;
}

/// MySQL repositories with the OTP cache in Redis
pub struct MySqlBackend;

impl Backend for MySqlBackend {
    type Accounts = MySqlAccountRepository;
    type Tokens = MySqlTokenRepository;
    type OtpCache = RedisOtpCache;
    type Notifier = LogOtpNotifier;
    type Songs = MySqlSongRepository;
    type History = MySqlPlayHistoryRepository;
}

/// Build the in-memory state around a song store
///
/// The song store is passed in so callers can seed the catalog.
pub fn build_memory_state(
    config: &AppConfig,
    songs: Arc<InMemorySongRepository>,
) -> AppState<MemoryBackend> {
    log::info!("Using in-memory storage backend");

    assemble::<MemoryBackend>(
        config,
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(InMemoryTokenRepository::new()),
        Arc::new(InMemoryTtlCache::new()),
        songs,
        Arc::new(InMemoryPlayHistoryRepository::new()),
    )
}

/// Song store for the memory backend, filled from `CATALOG_SEED_FILE` if set
pub async fn memory_catalog(config: &AppConfig) -> anyhow::Result<Arc<InMemorySongRepository>> {
    let songs = Arc::new(InMemorySongRepository::new());
    match &config.database.catalog_seed_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog seed file {}", path))?;
            let count = seed_catalog(&songs, &json)
                .await
                .with_context(|| format!("Invalid catalog seed file {}", path))?;
            log::info!("Loaded {} songs from {}", count, path);
        }
        None => log::warn!("CATALOG_SEED_FILE is not set; the in-memory catalog is empty"),
    }
    Ok(songs)
}

/// Insert every song of a JSON array, returning how many were loaded
pub async fn seed_catalog(songs: &InMemorySongRepository, json: &str) -> anyhow::Result<usize> {
    let parsed: Vec<Song> = serde_json::from_str(json)?;
    let count = parsed.len();
    for song in parsed {
        songs.insert(song).await;
    }
    Ok(count)
}

/// Connect to MySQL and Redis, apply migrations and build the state
pub async fn build_mysql_state(config: &AppConfig) -> anyhow::Result<AppState<MySqlBackend>> {
    log::info!("Using MySQL storage backend");

    let database = DatabasePool::new(&config.database)
        .await
        .context("Failed to connect to MySQL")?;
    database
        .run_migrations()
        .await
        .context("Failed to apply database migrations")?;
    log::info!("Database ready: {}", database.get_statistics());

    let redis = RedisClient::new(config.cache.clone())
        .await
        .context("Failed to connect to Redis")?;

    let pool = database.get_pool().clone();
    Ok(assemble::<MySqlBackend>(
        config,
        Arc::new(MySqlAccountRepository::new(pool.clone())),
        Arc::new(MySqlTokenRepository::new(pool.clone())),
        Arc::new(RedisOtpCache::new(redis)),
        Arc::new(MySqlSongRepository::new(pool.clone())),
        Arc::new(MySqlPlayHistoryRepository::new(pool)),
    ))
}

fn assemble<B: Backend<Notifier = LogOtpNotifier>>(
    config: &AppConfig,
    accounts: Arc<B::Accounts>,
    tokens: Arc<B::Tokens>,
    otp_cache: Arc<B::OtpCache>,
    songs: Arc<B::Songs>,
    history: Arc<B::History>,
) -> AppState<B> {
    let otp_service = Arc::new(OtpService::new(
        otp_cache,
        OtpServiceConfig::from_settings(&config.otp, config.environment),
    ));
    let auth_service = Arc::new(AuthService::new(
        accounts,
        tokens,
        otp_service,
        Arc::new(LogOtpNotifier::new()),
        AuthServiceConfig::from_settings(&config.auth),
    ));
    let history_service = Arc::new(HistoryService::new(history));
    let catalog_service = Arc::new(CatalogService::new(songs, Arc::clone(&history_service)));

    AppState {
        auth_service,
        catalog_service,
        history_service,
    }
}
