//! Main authentication service implementation

use std::sync::Arc;
use uuid::Uuid;

use catalog_shared::email::{mask_email, normalize_email};

use crate::domain::entities::Account;
use crate::domain::value_objects::{AccountProfile, LoginResult, LogoutOutcome, RegistrationResult};
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::{AccountRepository, TokenRepository};
use crate::services::otp::{IssuePolicy, IssuedOtp, OtpCacheTrait, OtpNotifier, OtpService};

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};
use super::types::RegistrationRequest;
use super::validation::validate_registration;

/// Authentication service for the account lifecycle
pub struct AuthService<A, T, C, N>
where
    A: AccountRepository,
    T: TokenRepository,
    C: OtpCacheTrait,
    N: OtpNotifier,
{
    account_repository: Arc<A>,
    token_repository: Arc<T>,
    otp_service: Arc<OtpService<C>>,
    notifier: Arc<N>,
    config: AuthServiceConfig,
}

impl<A, T, C, N> AuthService<A, T, C, N>
where
    A: AccountRepository,
    T: TokenRepository,
    C: OtpCacheTrait,
    N: OtpNotifier,
{
    pub fn new(
        account_repository: Arc<A>,
        token_repository: Arc<T>,
        otp_service: Arc<OtpService<C>>,
        notifier: Arc<N>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            account_repository,
            token_repository,
            otp_service,
            notifier,
            config,
        }
    }

    /// Register a new, inactive account and send it an activation code
    ///
    /// Every field problem, including taken usernames and emails, is
    /// reported at once as `ValidationError::Fields`. Any code pending for
    /// the same email is replaced.
    pub async fn register(&self, request: RegistrationRequest) -> DomainResult<RegistrationResult> {
        let request = RegistrationRequest {
            email: normalize_email(&request.email),
            ..request
        };

        let mut errors = validate_registration(&request, &self.config.password_policy);
        let field_ok = |field: &str| !errors.errors().iter().any(|e| e.field == field);

        let username_taken = field_ok("username")
            && self.account_repository.exists_by_username(&request.username).await?;
        let email_taken =
            field_ok("email") && self.account_repository.exists_by_email(&request.email).await?;

        if username_taken {
            errors.add_error("username", "A user with that username already exists.", "unique");
        }
        if email_taken {
            errors.add_error("email", "A user with that email already exists.", "unique");
        }
        if errors.has_errors() {
            tracing::info!(
                event = "registration_rejected",
                fields = ?errors.to_field_errors().keys().collect::<Vec<_>>(),
                "Registration failed validation"
            );
            return Err(ValidationError::Fields {
                fields: errors.to_field_errors(),
            }
            .into());
        }

        let password_hash = hash_password(&request.password, self.config.bcrypt_cost).await?;
        let account = self
            .account_repository
            .create(Account::new(
                request.username,
                request.email,
                password_hash,
                request.first_name,
                request.last_name,
            ))
            .await?;

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&account.email),
            event = "account_registered",
            "Registered inactive account"
        );

        let issued = self
            .otp_service
            .issue(&account.email, IssuePolicy::Overwrite)
            .await?;
        self.notify(&issued).await;

        Ok(RegistrationResult {
            profile: AccountProfile::from(account),
            otp: issued.echoed_code().map(str::to_string),
        })
    }

    /// Issue a fresh code unless one is still pending for `email`
    ///
    /// Whether an account exists for the email is not checked.
    pub async fn resend_otp(&self, email: &str) -> DomainResult<IssuedOtp> {
        let email = normalize_email(email);
        let issued = self
            .otp_service
            .issue(&email, IssuePolicy::CheckExisting)
            .await?;
        self.notify(&issued).await;
        Ok(issued)
    }

    /// Activate the account of `email` if `code` matches its pending OTP
    ///
    /// The code is consumed only when activation succeeds. Concurrent calls
    /// with the same code may all activate, but only the one that consumes
    /// the code reports success; the rest fail with `InvalidOtp`.
    pub async fn verify_and_activate(&self, email: &str, code: &str) -> DomainResult<AccountProfile> {
        let email = normalize_email(email);
        self.otp_service.check(&email, code).await?;

        let mut account = self
            .account_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        account.activate();
        let account = self.account_repository.save(account).await?;
        if !self.otp_service.invalidate(&email).await? {
            tracing::warn!(
                account_id = %account.id,
                email = %mask_email(&email),
                event = "otp_already_consumed",
                "OTP was consumed by a concurrent verification"
            );
            return Err(AuthError::InvalidOtp.into());
        }

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&email),
            event = "account_activated",
            "Account activated"
        );

        Ok(AccountProfile::from(account))
    }

    /// Exchange username and password for the account's token
    ///
    /// Unknown usernames, wrong passwords and inactive accounts are not
    /// told apart. Repeated logins return the same token.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<LoginResult> {
        let account = match self.account_repository.find_by_username(username).await? {
            Some(account) => account,
            None => {
                // Spend the same hashing time as a real check
                let _ = hash_password(password, self.config.bcrypt_cost).await;
                tracing::warn!(event = "login_failed", reason = "unknown_username", "Login failed");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let password_ok = verify_password(password, &account.password_hash).await?;
        if !password_ok || !account.is_active {
            tracing::warn!(
                account_id = %account.id,
                event = "login_failed",
                reason = if password_ok { "inactive" } else { "wrong_password" },
                "Login failed"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        let (token, created) = self.token_repository.get_or_create(account.id).await?;

        let mut account = account;
        account.record_login();
        let account = self.account_repository.save(account).await?;

        tracing::info!(
            account_id = %account.id,
            token_created = created,
            event = "login_success",
            "Login succeeded"
        );

        Ok(LoginResult {
            profile: AccountProfile::from(account),
            token,
            created,
        })
    }

    /// Revoke the account's token when `logout_all_devices` is set
    ///
    /// With a single token per account, a single-device logout has nothing
    /// to revoke and is only acknowledged. Revoking an absent token fails
    /// with `AuthError::AlreadyLoggedOut`.
    pub async fn logout(&self, account_id: Uuid, logout_all_devices: bool) -> DomainResult<LogoutOutcome> {
        if !logout_all_devices {
            return Ok(LogoutOutcome::Acknowledged);
        }

        if !self.token_repository.delete_for_account(account_id).await? {
            tracing::info!(
                account_id = %account_id,
                event = "logout_without_token",
                "Logout requested but no token exists"
            );
            return Err(AuthError::AlreadyLoggedOut.into());
        }

        tracing::info!(account_id = %account_id, event = "logout", "Token revoked");
        Ok(LogoutOutcome::TokenRevoked)
    }

    /// Resolve a token key to its active account
    ///
    /// # Returns
    /// * `Ok(None)` - Unknown key, or the owner is missing or inactive
    pub async fn authenticate_token(&self, key: &str) -> DomainResult<Option<AccountProfile>> {
        let token = match self.token_repository.find_by_key(key).await? {
            Some(token) => token,
            None => return Ok(None),
        };

        let account = self.account_repository.find_by_id(token.account_id).await?;
        Ok(account.filter(|a| a.is_active).map(AccountProfile::from))
    }

    async fn notify(&self, issued: &IssuedOtp) {
        if let Err(e) = self.notifier.deliver(&issued.email, &issued.code).await {
            tracing::warn!(
                email = %mask_email(&issued.email),
                error = %e,
                event = "otp_delivery_failed",
                "Failed to deliver OTP"
            );
        }
    }
}
