//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::password::DEFAULT_MIN_PASSWORD_LENGTH;

/// Upload size limit (5 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Upload file name limit (characters)
pub const DEFAULT_MAX_FILE_NAME_LENGTH: usize = 100;

/// Minimum accepted token secret length in bytes
pub const MIN_TOKEN_SECRET_LENGTH: usize = 32;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for bearer tokens
    pub token_secret: Vec<u8>,
    /// Token lifetime (24 hours)
    pub token_ttl: Duration,
    /// Minimum password length at registration
    pub min_password_length: usize,
    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
    /// Maximum upload file name length in characters
    pub max_file_name_length: usize,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            token_ttl: Duration::from_secs(24 * 3600), // 24 hours
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_file_name_length: DEFAULT_MAX_FILE_NAME_LENGTH,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with the given token secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        Self::with_secret(platform::crypto::random_bytes(MIN_TOKEN_SECRET_LENGTH))
    }

    /// Create config for development
    ///
    /// Tokens do not survive a restart because the secret is regenerated.
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Whether the secret is long enough for production use
    pub fn has_strong_secret(&self) -> bool {
        self.token_secret.len() >= MIN_TOKEN_SECRET_LENGTH
    }

    /// Body limit for the upload route
    ///
    /// Twice the validation limit plus 1 MiB for multipart framing, so that
    /// moderately oversize files reach validation and get `FILE_TOO_LARGE`.
    pub fn upload_body_limit(&self) -> usize {
        self.max_upload_bytes.saturating_mul(2).saturating_add(1024 * 1024)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("min_password_length", &self.min_password_length)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("max_file_name_length", &self.max_file_name_length)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl, Duration::from_secs(86_400));
        assert_eq!(config.min_password_length, 6);
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.max_file_name_length, 100);
        assert!(config.password_pepper.is_none());
        assert!(!config.has_strong_secret());
    }

    #[test]
    fn test_random_secret() {
        let a = AuthConfig::development();
        let b = AuthConfig::development();
        assert!(a.has_strong_secret());
        assert_ne!(a.token_secret, b.token_secret);
    }

    #[test]
    fn test_upload_body_limit_exceeds_validation_limit() {
        let config = AuthConfig::default();
        assert!(config.upload_body_limit() > 6 * 1024 * 1024 + 64 * 1024);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AuthConfig {
            password_pepper: Some(b"pepper".to_vec()),
            ..AuthConfig::with_secret(b"super-secret-value".to_vec())
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("token_secret: \"[REDACTED]\""));
        assert!(debug.contains("password_pepper: Some(\"[REDACTED]\")"));
    }
}
