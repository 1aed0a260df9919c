//! Bearer Token Extraction
//!
//! Reads `Authorization: Bearer <token>` from request headers.

use axum::http::{HeaderMap, header};

/// Authentication scheme prefix (RFC 6750)
const BEARER_PREFIX: &str = "Bearer ";

/// Error when extracting a bearer token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    /// No Authorization header at all
    #[error("Missing Authorization header")]
    Missing,

    /// Header present but not `Bearer <token>`
    #[error("Authorization header is not a bearer token")]
    Malformed,
}

/// Extract the bearer token from request headers
///
/// ## Returns
/// * `Ok(&str)` - The raw token (without the scheme prefix)
/// * `Err(BearerError::Missing)` - No Authorization header
/// * `Err(BearerError::Malformed)` - Non-UTF-8 value, other scheme, or empty token
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(BearerError::Malformed)?
        .trim();

    if token.is_empty() {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), Err(BearerError::Missing));
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer(&headers), Err(BearerError::Malformed));
    }

    #[test]
    fn test_empty_token() {
        let headers = headers_with("Bearer    ");
        assert_eq!(extract_bearer(&headers), Err(BearerError::Malformed));
    }

    #[test]
    fn test_scheme_is_case_sensitive_prefix() {
        let headers = headers_with("bearer abc");
        assert_eq!(extract_bearer(&headers), Err(BearerError::Malformed));
    }
}
