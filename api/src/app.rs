//! Application factory
//!
//! Builds the Actix-web application from a prepared `AppState`.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpResponse,
};

use catalog_shared::{error_codes, Environment, ErrorResponse, ServerConfig};

use crate::handlers::error::json_error_handler;
use crate::middleware::{
    auth::{TokenAuth, TokenAuthenticator},
    cors::create_cors,
};
use crate::routes::{auth, content, health::health_check, AppState, Backend};

/// Create and configure the application with all dependencies
pub fn create_app<B: Backend>(
    app_state: web::Data<AppState<B>>,
    server: &ServerConfig,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let authenticator: Arc<dyn TokenAuthenticator> = app_state.auth_service.clone();

    App::new()
        .app_data(app_state)
        .app_data(web::Data::from(authenticator))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Logger::default())
        .wrap(create_cors(server, environment))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/auth")
                .route("/username/login", web::post().to(auth::login::<B>))
                .route("/register", web::post().to(auth::register::<B>))
                .route(
                    "/verify-email-and-activate-account",
                    web::post().to(auth::verify_email_and_activate::<B>),
                )
                .route("/resend-otp", web::post().to(auth::resend_otp::<B>))
                .route(
                    "/logout",
                    web::post()
                        .to(auth::logout::<B>)
                        .wrap(TokenAuth::required()),
                ),
        )
        .service(
            web::scope("/content")
                .route(
                    "/songs/{id}",
                    web::get()
                        .to(content::retrieve_song::<B>)
                        .wrap(TokenAuth::optional()),
                )
                .route(
                    "/history",
                    web::get()
                        .to(content::list_history::<B>)
                        .wrap(TokenAuth::required()),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
