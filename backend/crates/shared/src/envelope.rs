//! Response Envelope
//!
//! Every HTTP response body, success or failure, has the same outer shape:
//!
//! ```json
//! { "success": true, "message": "...", "statusCode": 200, "timestamp": "2026-01-01T00:00:00Z", ... }
//! ```
//!
//! Success bodies flatten their payload next to these fields. Failure bodies
//! are built from [`AppError`](crate::error::app_error::AppError) and add
//! `error`, `code` and optional `details`.

use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::error::app_error::AppError;

static DIAGNOSTICS: AtomicBool = AtomicBool::new(false);

/// Enable or disable diagnostic details on 5xx responses.
///
/// Must stay disabled in production.
pub fn set_diagnostics(enabled: bool) {
    DIAGNOSTICS.store(enabled, Ordering::Relaxed);
}

/// Whether 5xx responses carry the error chain in `details`
pub fn diagnostics_enabled() -> bool {
    DIAGNOSTICS.load(Ordering::Relaxed)
}

/// Current time as an RFC 3339 string (millisecond precision, `Z` suffix)
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Success envelope with a flattened payload
///
/// ## Examples
/// ```rust
/// use kernel::envelope::Envelope;
/// use serde_json::json;
///
/// let env = Envelope::ok("Login successful", json!({ "token": "abc" }));
/// let body = serde_json::to_value(&env).unwrap();
/// assert_eq!(body["success"], true);
/// assert_eq!(body["token"], "abc");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub message: Cow<'static, str>,
    pub status_code: u16,
    pub timestamp: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// 200 OK envelope
    pub fn ok(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            status_code: 200,
            timestamp: timestamp_now(),
            data,
        }
    }
}

/// Failure envelope body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub success: bool,
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
    pub status_code: u16,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        let mut details = err.details().cloned();

        if err.is_server_error() && diagnostics_enabled() {
            let chain = err.source_chain();
            if !chain.is_empty() {
                let mut map = match details.take() {
                    Some(serde_json::Value::Object(map)) => map,
                    Some(other) => {
                        let mut map = serde_json::Map::new();
                        map.insert("details".to_string(), other);
                        map
                    }
                    None => serde_json::Map::new(),
                };
                map.insert("errorDetails".to_string(), serde_json::json!(chain));
                details = Some(serde_json::Value::Object(map));
            }
        }

        Self {
            success: false,
            error: err.kind().as_str(),
            code: err.code().map(str::to_string),
            message: err.message().to_string(),
            status_code: err.status_code(),
            timestamp: timestamp_now(),
            details,
        }
    }
}
