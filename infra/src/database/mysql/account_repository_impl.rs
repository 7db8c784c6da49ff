//! MySQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use catalog_core::domain::entities::Account;
use catalog_core::errors::{DomainError, ValidationError};
use catalog_core::repositories::AccountRepository;

use super::{db_error, is_unique_violation, parse_uuid};

const ACCOUNT_COLUMNS: &str = "id, username, email, password_hash, first_name, last_name, \
     is_active, created_at, updated_at, last_login_at";

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &MySqlRow) -> Result<Account, DomainError> {
        let get_err = |e: sqlx::Error| db_error("Failed to decode account row", e);
        let id: String = row.try_get("id").map_err(get_err)?;

        Ok(Account {
            id: parse_uuid("accounts.id", &id)?,
            username: row.try_get("username").map_err(get_err)?,
            email: row.try_get("email").map_err(get_err)?,
            password_hash: row.try_get("password_hash").map_err(get_err)?,
            first_name: row.try_get("first_name").map_err(get_err)?,
            last_name: row.try_get("last_name").map_err(get_err)?,
            is_active: row.try_get("is_active").map_err(get_err)?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(get_err)?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at").map_err(get_err)?,
            last_login_at: row
                .try_get::<Option<DateTime<Utc>>, _>("last_login_at")
                .map_err(get_err)?,
        })
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<Account>, DomainError> {
        let query = format!("SELECT {} FROM accounts WHERE {} = ? LIMIT 1", ACCOUNT_COLUMNS, column);
        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find account", e))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn exists(&self, column: &str, value: &str) -> Result<bool, DomainError> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM accounts WHERE {} = ?)", column);
        let exists: i64 = sqlx::query_scalar(&query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check account existence", e))?;
        Ok(exists == 1)
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        self.find_one("id", &id.to_string()).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("username", username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("email", email).await
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, username, email, password_hash, first_name, last_name,
                is_active, created_at, updated_at, last_login_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.is_active)
            .bind(account.created_at)
            .bind(account.updated_at)
            .bind(account.last_login_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(account),
            Err(e) if is_unique_violation(&e) => {
                // MySQL names the violated key in the message
                let field = if e.to_string().contains("uq_accounts_username") {
                    "username"
                } else {
                    "email"
                };
                Err(ValidationError::DuplicateValue {
                    field: field.to_string(),
                }
                .into())
            }
            Err(e) => Err(db_error("Failed to create account", e)),
        }
    }

    async fn save(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            UPDATE accounts
            SET username = ?, email = ?, password_hash = ?, first_name = ?, last_name = ?,
                is_active = ?, updated_at = ?, last_login_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.is_active)
            .bind(account.updated_at)
            .bind(account.last_login_at)
            .bind(account.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to save account", e))?;

        // Unchanged rows report zero affected rows, so confirm the id exists
        if result.rows_affected() == 0 && !self.exists("id", &account.id.to_string()).await? {
            return Err(DomainError::NotFound {
                resource: format!("account {}", account.id),
            });
        }

        Ok(account)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        self.exists("username", username).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.exists("email", email).await
    }
}
