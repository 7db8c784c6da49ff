//! MySQL implementation of the TokenRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use catalog_core::domain::entities::AuthToken;
use catalog_core::errors::DomainError;
use catalog_core::repositories::TokenRepository;

use super::{db_error, is_unique_violation, parse_uuid};

/// MySQL implementation of TokenRepository
///
/// `auth_tokens.account_id` is unique; concurrent first logins race on the
/// insert and the loser re-reads the winner's row.
pub struct MySqlTokenRepository {
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &MySqlRow) -> Result<AuthToken, DomainError> {
        let get_err = |e: sqlx::Error| db_error("Failed to decode token row", e);
        let account_id: String = row.try_get("account_id").map_err(get_err)?;

        Ok(AuthToken {
            key: row.try_get("token_key").map_err(get_err)?,
            account_id: parse_uuid("auth_tokens.account_id", &account_id)?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(get_err)?,
        })
    }

    async fn find_by_account(&self, account_id: Uuid) -> Result<Option<AuthToken>, DomainError> {
        let row = sqlx::query(
            "SELECT token_key, account_id, created_at FROM auth_tokens WHERE account_id = ? LIMIT 1",
        )
        .bind(account_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find token by account", e))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn get_or_create(&self, account_id: Uuid) -> Result<(AuthToken, bool), DomainError> {
        if let Some(existing) = self.find_by_account(account_id).await? {
            return Ok((existing, false));
        }

        let token = AuthToken::new(account_id);
        let inserted = sqlx::query(
            "INSERT INTO auth_tokens (token_key, account_id, created_at) VALUES (?, ?, ?)",
        )
        .bind(&token.key)
        .bind(account_id.to_string())
        .bind(token.created_at)
        .execute(&self.pool)
        .await;

        match inserted {
            Ok(_) => Ok((token, true)),
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!(account_id = %account_id, "Concurrent token creation, re-reading");
                let existing = self.find_by_account(account_id).await?.ok_or_else(|| {
                    DomainError::Internal {
                        message: "Token vanished after unique violation".to_string(),
                    }
                })?;
                Ok((existing, false))
            }
            Err(e) => Err(db_error("Failed to create token", e)),
        }
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<AuthToken>, DomainError> {
        let row = sqlx::query(
            "SELECT token_key, account_id, created_at FROM auth_tokens WHERE token_key = ? LIMIT 1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find token", e))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }

    async fn delete_for_account(&self, account_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM auth_tokens WHERE account_id = ?")
            .bind(account_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete token", e))?;

        Ok(result.rows_affected() > 0)
    }
}
