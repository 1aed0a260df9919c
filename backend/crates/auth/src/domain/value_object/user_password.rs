//! User Password Value Object
//!
//! Domain value object for user passwords.
//! Delegates to `platform::password` for cryptographic operations.
//!
//! ## Security Features
//! - Argon2id hashing (memory-hard)
//! - Automatic memory zeroization
//! - Constant-time comparison
//! - Unicode NFKC normalization
//!
//! Everything here is synchronous and CPU-bound. Callers on the async
//! runtime go through `application::hashing`, which moves the work onto
//! the blocking pool.

use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError};
use std::fmt;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Wrap login input as-is (no policy)
    pub fn new(raw: String) -> Self {
        Self(ClearTextPassword::new(raw))
    }

    /// Wrap registration input, enforcing the minimum length
    pub fn for_signup(raw: String, min_length: usize) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw);
        clear_text
            .check_min_length(min_length)
            .map_err(|_| AuthError::PasswordTooShort { min: min_length })?;
        Ok(Self(clear_text))
    }

    /// Access the inner platform type
    pub(crate) fn as_clear_text(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, safe to store)
// ============================================================================

/// Hashed user password
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        raw.as_clear_text()
            .hash(pepper)
            .map(Self)
            .map_err(hash_error)
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.as_clear_text(), pepper)
    }

    /// Run a verification against a fixed digest; always `false`
    pub fn verify_dummy(raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        platform::password::verify_dummy(raw.as_clear_text(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}

fn hash_error(e: PasswordHashError) -> AuthError {
    AuthError::Internal(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_policy() {
        assert!(matches!(
            RawPassword::for_signup("12345".to_string(), 6),
            Err(AuthError::PasswordTooShort { min: 6 })
        ));
        assert!(RawPassword::for_signup("123456".to_string(), 6).is_ok());
    }

    #[test]
    fn test_login_has_no_policy() {
        let raw = RawPassword::new("x".to_string());
        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        assert!(hashed.verify(&raw, None));
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("demo123".to_string());
        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        assert!(hashed.verify(&raw, None));
        assert!(!hashed.verify(&RawPassword::new("demo124".to_string()), None));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("secret".to_string());
        assert!(!format!("{raw:?}").contains("secret"));
        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        assert!(!format!("{hashed:?}").contains("argon2"));
    }
}
