//! CORS middleware configuration for cross-origin requests.
//!
//! Development is permissive. Production only admits the origins listed in
//! `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use catalog_shared::{Environment, ServerConfig};

/// Creates a CORS middleware instance configured for the environment.
pub fn create_cors(server: &ServerConfig, environment: Environment) -> Cors {
    if environment.is_production() {
        create_production_cors(server)
    } else {
        create_development_cors(server.cors_max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    log::debug!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
        .supports_credentials()
}

fn create_production_cors(server: &ServerConfig) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(server.cors_max_age);

    for origin in &server.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    if server.allowed_origins.is_empty() {
        log::warn!("ALLOWED_ORIGINS is empty; cross-origin requests will be refused");
    }

    cors
}
