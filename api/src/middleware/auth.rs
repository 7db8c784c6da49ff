//! Token authentication middleware for protecting API endpoints.
//!
//! Clients send `Authorization: Token <key>`; the `Bearer` scheme is
//! accepted as well. The key is resolved to an active account through the
//! `TokenAuthenticator` registered in app data, and an `AuthContext` is
//! injected into the request.
//!
//! The middleware works in two modes:
//! 1. Required: requests without a valid token are rejected with 401
//! 2. Optional: anonymous requests pass through; a bad token is still 401

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorUnauthorized, InternalError},
    http::header::{HeaderMap, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use catalog_core::domain::value_objects::AccountProfile;
use catalog_core::errors::{AuthError, DomainResult};
use catalog_core::repositories::{AccountRepository, TokenRepository};
use catalog_core::services::{AuthService, OtpCacheTrait, OtpNotifier};
use catalog_shared::ErrorResponse;

use crate::handlers::error::handle_domain_error;

/// Authenticated caller injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub account_id: Uuid,
    pub username: String,
    pub email: String,
    /// Key the request authenticated with
    pub token_key: String,
}

impl AuthContext {
    pub fn new(profile: AccountProfile, token_key: String) -> Self {
        Self {
            account_id: profile.id,
            username: profile.username,
            email: profile.email,
            token_key,
        }
    }
}

/// Resolves token keys to active accounts
#[async_trait]
pub trait TokenAuthenticator: Send + Sync {
    async fn authenticate(&self, key: &str) -> DomainResult<Option<AccountProfile>>;
}

#[async_trait]
impl<A, T, C, N> TokenAuthenticator for AuthService<A, T, C, N>
where
    A: AccountRepository + 'static,
    T: TokenRepository + 'static,
    C: OtpCacheTrait + 'static,
    N: OtpNotifier + 'static,
{
    async fn authenticate(&self, key: &str) -> DomainResult<Option<AccountProfile>> {
        self.authenticate_token(key).await
    }
}

/// Token authentication middleware factory
pub struct TokenAuth {
    required: bool,
}

impl TokenAuth {
    /// Reject requests that do not carry a valid token
    pub fn required() -> Self {
        Self { required: true }
    }

    /// Let anonymous requests through, authenticate the rest
    pub fn optional() -> Self {
        Self { required: false }
    }
}

impl<S, B> Transform<S, ServiceRequest> for TokenAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenAuthMiddleware {
            service: Rc::new(service),
            required: self.required,
        }))
    }
}

/// Token authentication middleware service
pub struct TokenAuthMiddleware<S> {
    service: Rc<S>,
    required: bool,
}

impl<S, B> Service<ServiceRequest> for TokenAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let required = self.required;

        Box::pin(async move {
            let key = match extract_token_key(req.headers()) {
                Some(key) => key,
                None if required => return Err(unauthorized(AuthError::AuthenticationRequired)),
                None => return service.call(req).await,
            };

            let authenticator = req
                .app_data::<web::Data<dyn TokenAuthenticator>>()
                .cloned()
                .ok_or_else(|| {
                    log::error!("No TokenAuthenticator registered in app data");
                    unauthorized(AuthError::AuthenticationRequired)
                })?;

            match authenticator.authenticate(&key).await {
                Ok(Some(profile)) => {
                    req.extensions_mut().insert(AuthContext::new(profile, key));
                }
                Ok(None) => return Err(unauthorized(AuthError::InvalidToken)),
                Err(e) => {
                    let message = e.to_string();
                    return Err(InternalError::from_response(message, handle_domain_error(e)).into());
                }
            }

            service.call(req).await
        })
    }
}

/// Extracts the key from `Token <key>` or `Bearer <key>`
pub fn extract_token_key(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, key) = value.trim().split_once(' ')?;
    let key = key.trim();

    let known_scheme =
        scheme.eq_ignore_ascii_case("token") || scheme.eq_ignore_ascii_case("bearer");
    if !known_scheme || key.is_empty() || key.contains(' ') {
        return None;
    }
    Some(key.to_string())
}

fn unauthorized(error: AuthError) -> Error {
    let response =
        HttpResponse::Unauthorized().json(ErrorResponse::new(error.code(), error.to_string()));
    InternalError::from_response(error.to_string(), response).into()
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication credentials were not provided."));

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}
