use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use catalog_api::app::create_app;
use catalog_api::backend::{build_memory_state, build_mysql_state, memory_catalog};
use catalog_api::routes::{AppState, Backend};
use catalog_shared::{AppConfig, DataBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!(
        "Starting catalog API server ({} environment)",
        config.environment
    );

    if config.otp.debug && config.environment.is_production() {
        warn!("DEBUG is set in production; OTP codes will not be echoed in responses");
    } else if config.otp_echo_enabled() {
        warn!("OTP echo is enabled; issued codes are returned in API responses");
    }

    match config.database.backend {
        DataBackend::Memory => {
            let state = build_memory_state(&config, memory_catalog(&config).await?);
            serve(web::Data::new(state), &config).await
        }
        DataBackend::Mysql => {
            let state = build_mysql_state(&config).await?;
            serve(web::Data::new(state), &config).await
        }
    }
}

async fn serve<B: Backend>(state: web::Data<AppState<B>>, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let server_config = config.server.clone();
    let environment = config.environment;

    let mut server =
        HttpServer::new(move || create_app(state.clone(), &server_config, environment));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;
    Ok(())
}
