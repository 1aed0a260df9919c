//! Email Value Object
//!
//! The login identifier. Addresses are kept exactly as the user typed them
//! and no format rules apply: lookups are case-sensitive, so
//! `Demo@example.com` and `demo@example.com` are different accounts.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Email validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email cannot be empty")]
    Empty,
}

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct Email(String);

impl Email {
    /// Wrap a non-empty address as-is
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into();
        if email.is_empty() {
            return Err(EmailError::Empty);
        }
        Ok(Self(email))
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_any_non_empty_address() {
        for raw in [
            "demo@example.com",
            "user+tag@example.co.jp",
            "ops@localhost",
            "user@bücher.de",
            "not-an-email",
        ] {
            assert_eq!(Email::new(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn test_email_empty() {
        assert_eq!(Email::new(""), Err(EmailError::Empty));
    }

    #[test]
    fn test_email_is_stored_verbatim() {
        let email = Email::new(" Demo@Example.COM").unwrap();
        assert_eq!(email.as_str(), " Demo@Example.COM");
        assert_ne!(email, Email::new("demo@example.com").unwrap());
    }
}
