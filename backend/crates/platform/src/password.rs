//! Password Hashing and Verification
//!
//! Password handling with:
//! - Argon2id hashing (memory-hard, random salt per hash, PHC string output)
//! - Zeroization of sensitive data
//! - Constant-time comparison
//! - Optional application-wide pepper
//!
//! The only policy enforced here is the minimum length check, and only when a
//! caller asks for it (registration does, login does not).

use std::fmt;
use std::sync::OnceLock;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Constants
// ============================================================================

/// Default minimum password length for new accounts
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Input hashed once to produce the digest used by [`verify_dummy`]
const DUMMY_PASSWORD: &str = "dummy-password-for-timing-equalization";

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize, actual: usize },
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("demo123".to_string());
/// assert!(password.check_min_length(6).is_ok());
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap raw user input
    ///
    /// Unicode is normalized using NFKC so that visually identical input
    /// hashes identically regardless of the client's composition form.
    pub fn new(raw: String) -> Self {
        let raw = Zeroizing::new(raw);
        let normalized: String = raw.nfkc().collect();
        Self(normalized)
    }

    /// Number of Unicode code points (not bytes)
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Check the minimum length rule
    pub fn check_min_length(&self, min: usize) -> Result<(), PasswordPolicyError> {
        let actual = self.char_count();
        if actual < min {
            return Err(PasswordPolicyError::TooShort { min, actual });
        }
        Ok(())
    }

    /// Password bytes with the pepper appended, wiped on drop
    fn peppered_bytes(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut combined = Zeroizing::new(self.0.as_bytes().to_vec());
        if let Some(p) = pepper {
            combined.extend_from_slice(p);
        }
        combined
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret for additional security
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered_bytes(pepper);

        // Generate random salt (128 bits = 16 bytes)
        let salt = SaltString::generate(&mut OsRng);

        // OWASP recommended Argon2id parameters:
        // m=19456 (19 MiB), t=2, p=1
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The PHC string carries algorithm, version, parameters, salt and hash,
/// so verification never needs out-of-band data besides the pepper.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("demo123".to_string());
/// let hashed = password.hash(None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Verify a password against this hash
    ///
    /// Uses constant-time comparison to prevent timing attacks.
    ///
    /// ## Arguments
    /// * `password` - The clear text password to verify
    /// * `pepper` - Optional pepper (must match the one used during hashing)
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let password_bytes = password.peppered_bytes(pepper);

        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        // Argon2 uses constant-time comparison internally
        Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Timing equalization
// ============================================================================

static DUMMY_HASH: OnceLock<Option<HashedPassword>> = OnceLock::new();

/// Run one full verification against a fixed digest and discard the result
///
/// Call this when the account does not exist so that "unknown account" and
/// "wrong password" take the same time. Always returns `false`.
pub fn verify_dummy(password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
    let dummy = DUMMY_HASH.get_or_init(|| {
        ClearTextPassword::new(DUMMY_PASSWORD.to_string())
            .hash(None)
            .ok()
    });

    if let Some(hash) = dummy {
        let _ = hash.verify(password, pepper);
    }
    false
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length() {
        let short = ClearTextPassword::new("abcde".to_string());
        assert_eq!(
            short.check_min_length(DEFAULT_MIN_PASSWORD_LENGTH),
            Err(PasswordPolicyError::TooShort { min: 6, actual: 5 })
        );

        let ok = ClearTextPassword::new("abcdef".to_string());
        assert!(ok.check_min_length(DEFAULT_MIN_PASSWORD_LENGTH).is_ok());
    }

    #[test]
    fn test_length_counts_code_points() {
        // 6 code points, 18 bytes
        let password = ClearTextPassword::new("パスワード安".to_string());
        assert_eq!(password.char_count(), 6);
        assert!(password.check_min_length(6).is_ok());
    }

    #[test]
    fn test_nfkc_normalization() {
        // Fullwidth "ＡＢＣ" normalizes to "ABC"
        let wide = ClearTextPassword::new("ＡＢＣ123".to_string());
        let hashed = wide.hash(None).unwrap();
        let narrow = ClearTextPassword::new("ABC123".to_string());
        assert!(hashed.verify(&narrow, None));
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("demo123".to_string());
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&password, None));

        let wrong = ClearTextPassword::new("wrong".to_string());
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_hash_of_different_input_rejects() {
        for raw in ["demo123", "", "correct horse battery staple", "ü"] {
            let password = ClearTextPassword::new(raw.to_string());
            let other = ClearTextPassword::new(format!("{raw}x")).hash(None).unwrap();
            assert!(!other.verify(&password, None), "input {raw:?}");
        }
    }

    #[test]
    fn test_random_salt() {
        let password = ClearTextPassword::new("same-password".to_string());
        let a = password.hash(None).unwrap();
        let b = password.hash(None).unwrap();
        assert_ne!(a, b);
        assert!(a.verify(&password, None));
        assert!(b.verify(&password, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::new("TestPassword123!".to_string());
        let pepper = b"my_secret_pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_digest_is_argon2id() {
        let password = ClearTextPassword::new("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();
        assert!(hashed.hash.starts_with("$argon2id$"));
        assert!(!format!("{hashed:?}").contains("argon2"));
    }

    #[test]
    fn test_verify_dummy_is_always_false() {
        let password = ClearTextPassword::new(DUMMY_PASSWORD.to_string());
        assert!(!verify_dummy(&password, None));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = password.hash(None).unwrap();
        assert!(!format!("{:?}", hashed).contains("argon2"));
    }
}
