//! Token Codec
//!
//! Compact HMAC-SHA256 signed tokens in the three-segment JWT layout:
//!
//! ```text
//! base64url(header) "." base64url(claims) "." base64url(HMAC-SHA256(secret, header "." claims))
//! ```
//!
//! The header is always `{"alg":"HS256","typ":"JWT"}` and segments carry no
//! padding. The signature is checked before the claims segment is decoded,
//! so unsigned data is never parsed.

use std::time::Duration;

use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entity::claims::Claims;
use crate::domain::value_object::{email::Email, user_id::UserId};

const ALGORITHM: &str = "HS256";
const TOKEN_TYPE: &str = "JWT";

/// Token validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Wrong segment count, bad base64, bad JSON, or unsupported algorithm
    #[error("malformed token")]
    Malformed,

    /// MAC does not match header and claims
    #[error("invalid token signature")]
    InvalidSignature,

    /// `now >= exp`
    #[error("token expired")]
    Expired,

    /// Claims could not be serialized while minting
    #[error("token encoding failed: {0}")]
    Encoding(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct Header<'a> {
    alg: &'a str,
    typ: &'a str,
}

/// A freshly minted token together with the claims it carries
#[derive(Debug, Clone)]
pub struct MintedToken {
    pub token: String,
    pub claims: Claims,
}

/// Signs and validates bearer tokens with one process-wide secret
#[derive(Clone)]
pub struct TokenCodec {
    secret: Vec<u8>,
    ttl_secs: i64,
}

impl TokenCodec {
    pub fn new(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs: i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX),
        }
    }

    /// Mint a token for `user_id` issued now
    pub fn mint(&self, user_id: &UserId, email: &Email) -> Result<MintedToken, TokenError> {
        self.mint_at(user_id, email, chrono::Utc::now().timestamp())
    }

    /// Mint a token issued at `now` (Unix seconds)
    pub fn mint_at(
        &self,
        user_id: &UserId,
        email: &Email,
        now: i64,
    ) -> Result<MintedToken, TokenError> {
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.as_str().to_string(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
        };
        let token = self.encode(&claims)?;
        Ok(MintedToken { token, claims })
    }

    /// Sign arbitrary claims
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = serde_json::to_vec(&Header {
            alg: ALGORITHM,
            typ: TOKEN_TYPE,
        })
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
        let payload =
            serde_json::to_vec(claims).map_err(|e| TokenError::Encoding(e.to_string()))?;

        let signing_input = format!("{}.{}", to_base64url(&header), to_base64url(&payload));
        let signature = hmac_sha256(&self.secret, signing_input.as_bytes());

        Ok(format!("{signing_input}.{}", to_base64url(&signature)))
    }

    /// Validate a token against the current clock
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_at(token, chrono::Utc::now().timestamp())
    }

    /// Validate a token against `now` (Unix seconds)
    pub fn validate_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let mut segments = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Malformed);
        };

        let header_bytes = from_base64url(header_b64).map_err(|_| TokenError::Malformed)?;
        let header: Header<'_> =
            serde_json::from_slice(&header_bytes).map_err(|_| TokenError::Malformed)?;
        if header.alg != ALGORITHM {
            return Err(TokenError::Malformed);
        }

        let signature = from_base64url(signature_b64).map_err(|_| TokenError::Malformed)?;

        // Signature covers the encoded segments exactly as received
        let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];
        if !verify_hmac_sha256(&self.secret, signing_input.as_bytes(), &signature) {
            return Err(TokenError::InvalidSignature);
        }

        let payload = from_base64url(payload_b64).map_err(|_| TokenError::Malformed)?;
        let claims: Claims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("secret", &"[REDACTED]")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}
