//! OTP issuance and verification

use chrono::{Duration, Utc};
use constant_time_eq::constant_time_eq;
use std::sync::Arc;

use catalog_shared::config::otp::DEFAULT_OTP_ALLOWED_CHARS;
use catalog_shared::email::mask_email;

use crate::errors::{AuthError, DomainError, DomainResult};

use super::config::OtpServiceConfig;
use super::generator::generate_code;
use super::traits::OtpCacheTrait;
use super::types::{IssuePolicy, IssuedOtp};

/// Issues and checks one-time codes for an email address
pub struct OtpService<C: OtpCacheTrait> {
    cache: Arc<C>,
    config: OtpServiceConfig,
    alphabet: Vec<char>,
}

impl<C: OtpCacheTrait> OtpService<C> {
    pub fn new(cache: Arc<C>, config: OtpServiceConfig) -> Self {
        let mut alphabet: Vec<char> = config.allowed_chars.chars().collect();
        if alphabet.is_empty() {
            tracing::warn!(
                event = "otp_alphabet_empty",
                "Configured OTP alphabet is empty, using the default alphabet"
            );
            alphabet = DEFAULT_OTP_ALLOWED_CHARS.chars().collect();
        }

        Self {
            cache,
            config,
            alphabet,
        }
    }

    pub fn config(&self) -> &OtpServiceConfig {
        &self.config
    }

    /// Cache key holding the pending code of an email
    pub fn cache_key(email: &str) -> String {
        format!("otp:{}", email)
    }

    /// Generate and store a new code for `email`
    ///
    /// With [`IssuePolicy::CheckExisting`] a live code makes this fail with
    /// `AuthError::OtpAlreadyPending`. The check and the write are two cache
    /// calls, so two concurrent issues resolve as last write wins.
    pub async fn issue(&self, email: &str, policy: IssuePolicy) -> DomainResult<IssuedOtp> {
        let key = Self::cache_key(email);

        if policy == IssuePolicy::CheckExisting {
            let pending = self.cache.get(&key).await.map_err(|e| cache_failure(email, e))?;
            if pending.is_some() {
                tracing::info!(
                    email = %mask_email(email),
                    event = "otp_already_pending",
                    "Refused to issue OTP while one is pending"
                );
                return Err(AuthError::OtpAlreadyPending.into());
            }
        }

        let code = generate_code(self.config.length, &self.alphabet);
        self.cache
            .set(&key, &code, self.config.ttl_seconds)
            .await
            .map_err(|e| cache_failure(email, e))?;

        tracing::info!(
            email = %mask_email(email),
            ttl_seconds = self.config.ttl_seconds,
            policy = ?policy,
            event = "otp_issued",
            "Issued OTP"
        );

        Ok(IssuedOtp {
            email: email.to_string(),
            code,
            expires_at: Utc::now() + Duration::seconds(self.config.ttl_seconds as i64),
            echo: self.config.echo_enabled,
        })
    }

    /// Check `submitted` against the pending code of `email`
    ///
    /// A missing, expired or different code all fail with the same
    /// `AuthError::InvalidOtp`. The pending code is left in place.
    pub async fn check(&self, email: &str, submitted: &str) -> DomainResult<()> {
        let stored = self
            .cache
            .get(&Self::cache_key(email))
            .await
            .map_err(|e| cache_failure(email, e))?;

        let matches = stored
            .map(|code| constant_time_eq(code.as_bytes(), submitted.as_bytes()))
            .unwrap_or(false);

        if !matches {
            tracing::warn!(
                email = %mask_email(email),
                event = "otp_verification_failed",
                "OTP verification failed"
            );
            return Err(AuthError::InvalidOtp.into());
        }

        Ok(())
    }

    /// Drop the pending code of `email` so it cannot be replayed
    ///
    /// Returns whether this call removed the code. When two holders of the
    /// same code race, only one gets `true`.
    pub async fn invalidate(&self, email: &str) -> DomainResult<bool> {
        self.cache
            .delete(&Self::cache_key(email))
            .await
            .map_err(|e| cache_failure(email, e))
    }
}

fn cache_failure(email: &str, error: String) -> DomainError {
    tracing::error!(
        email = %mask_email(email),
        error = %error,
        event = "otp_cache_failed",
        "OTP cache operation failed"
    );
    DomainError::internal(format!("OTP cache error: {}", error))
}
