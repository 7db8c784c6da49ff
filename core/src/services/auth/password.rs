//! Password hashing and password policy

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::errors::{DomainError, DomainResult};

/// Hash a password with bcrypt on the blocking pool
pub async fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
}

/// Check a password against a stored bcrypt hash
///
/// A malformed stored hash counts as a mismatch.
pub async fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| DomainError::internal(format!("Password check task failed: {}", e)))?;

    match outcome {
        Ok(valid) => Ok(valid),
        Err(e) => {
            tracing::warn!(error = %e, event = "password_hash_malformed", "Stored password hash is unreadable");
            Ok(false)
        }
    }
}

static COMMON_PASSWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "password", "password1", "password12", "password123", "passw0rd", "12345678",
        "123456789", "1234567890", "qwerty123", "qwertyuiop", "iloveyou", "sunshine",
        "princess", "football", "baseball", "welcome1", "welcome123", "abc12345",
        "abcd1234", "letmein1", "trustno1", "superman", "starwars", "whatever",
        "master123", "monkey123", "dragon123", "1q2w3e4r", "1qaz2wsx", "zaq12wsx",
        "qwerty12", "admin123", "changeme", "football1", "michael1", "shadow12",
        "aa123456", "11111111", "00000000", "asdfghjkl", "computer", "internet",
    ]
    .into_iter()
    .collect()
});

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

/// Minimum length of an attribute fragment considered for similarity
const MIN_SIMILAR_FRAGMENT: usize = 3;

/// Rules a new password must satisfy
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
        }
    }
}

impl PasswordPolicy {
    /// Every rule the password breaks, as user-facing messages
    ///
    /// Only the local part of `email` counts for similarity; the domain
    /// (`gmail`, `com`) says nothing about the owner.
    pub fn check(&self, password: &str, username: &str, email: &str) -> Vec<String> {
        let mut problems = Vec::new();
        let length = password.chars().count();

        if length < self.min_length {
            problems.push(format!(
                "This password is too short. It must contain at least {} characters.",
                self.min_length
            ));
        }
        if length > self.max_length {
            problems.push(format!(
                "This password is too long. It must contain at most {} characters.",
                self.max_length
            ));
        }
        if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
            problems.push("This password is entirely numeric.".to_string());
        }
        if COMMON_PASSWORDS.contains(password.to_lowercase().as_str()) {
            problems.push("This password is too common.".to_string());
        }
        let email_local = email.split('@').next().unwrap_or_default();
        if is_similar(password, username) {
            problems.push("The password is too similar to the username.".to_string());
        } else if is_similar(password, email_local) {
            problems.push("The password is too similar to the email address.".to_string());
        }

        problems
    }
}

/// Whether the password embeds the attribute or one of its word fragments
fn is_similar(password: &str, attribute: &str) -> bool {
    let password = password.to_lowercase();
    let attribute = attribute.to_lowercase();
    if attribute.chars().count() < MIN_SIMILAR_FRAGMENT || password.is_empty() {
        return false;
    }
    if password.contains(&attribute) || attribute.contains(&password) {
        return true;
    }

    NON_WORD
        .split(&attribute)
        .filter(|part| part.chars().count() >= MIN_SIMILAR_FRAGMENT)
        .any(|part| password.contains(part))
}
