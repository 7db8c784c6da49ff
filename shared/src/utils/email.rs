//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Pragmatic address check: local part, one '@', dotted domain with a 2+ letter TLD
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,}$").unwrap()
});

/// Maximum length of an email address (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Normalize an email address: trim whitespace and lowercase the domain part
pub fn normalize_email(email: &str) -> String {
    let trimmed = email.trim();
    match trimmed.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => trimmed.to_string(),
    }
}

/// Check if an email address is syntactically valid
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Mask an email address for logs (e.g., j***e@example.com)
pub fn mask_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => {
            let chars: Vec<char> = local.chars().collect();
            let masked_local = match chars.len() {
                0 => String::new(),
                1 | 2 => format!("{}***", chars[0]),
                n => format!("{}***{}", chars[0], chars[n - 1]),
            };
            format!("{}@{}", masked_local, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("listener@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example.c"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Jane@Example.COM "), "Jane@example.com");
        assert_eq!(normalize_email("not-an-email"), "not-an-email");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane@example.com"), "j***e@example.com");
        assert_eq!(mask_email("jo@example.com"), "j***@example.com");
        assert_eq!(mask_email("invalid"), "***");
    }
}
