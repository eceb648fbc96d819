use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use super::errors::UserError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// New accounts are regular customers; the admin flag is only ever
    /// granted out of band.
    pub fn new(email: String, password_hash: String) -> Result<Self, UserError> {
        if !EMAIL_PATTERN.is_match(&email) {
            return Err(UserError::EmailInvalid);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            email: email.to_lowercase(),
            password_hash,
            is_admin: false,
            created_at: Utc::now(),
        })
    }

    pub fn from_repository(
        id: Uuid,
        email: String,
        password_hash: String,
        is_admin: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            is_admin,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_lowercase_email_on_creation() {
        let user = User::new("Ada@Example.COM".to_string(), "hash".to_string()).unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert!(!user.is_admin);
    }

    #[test]
    fn should_reject_email_without_at_sign() {
        assert!(matches!(
            User::new("not-an-email".to_string(), "hash".to_string()),
            Err(UserError::EmailInvalid)
        ));
    }

    #[test]
    fn should_reject_email_with_spaces() {
        assert!(matches!(
            User::new("a b@example.com".to_string(), "hash".to_string()),
            Err(UserError::EmailInvalid)
        ));
    }
}
