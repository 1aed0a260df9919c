//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Every token failure (and a token whose subject no longer exists) is
//! reported to the caller as the same 401 "Invalid or expired token". The
//! precise variant only shows up in the logs.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde_json::json;
use thiserror::Error;

use crate::domain::services::TokenError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    // ------------------------------------------------------------------
    // Request validation
    // ------------------------------------------------------------------
    /// A required field is absent or empty
    #[error("{0}")]
    MissingFields(&'static str),

    /// Body is not the JSON shape the endpoint expects
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// Password below the registration minimum
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    // ------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------
    /// Email already registered
    #[error("User already exists with this email")]
    EmailAlreadyExists,

    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    // ------------------------------------------------------------------
    // Bearer tokens
    // ------------------------------------------------------------------
    /// No usable `Authorization: Bearer` header
    #[error("Authorization token required")]
    Unauthenticated,

    /// Token structure or header unusable
    #[error("Malformed token")]
    MalformedToken,

    /// Signature does not match
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token past its expiry
    #[error("Token expired")]
    Expired,

    /// Token subject has no record
    #[error("Token subject not found")]
    UserNotFound,

    // ------------------------------------------------------------------
    // Uploads
    // ------------------------------------------------------------------
    /// Multipart body could not be parsed
    #[error("Invalid form data: {0}")]
    InvalidFormData(String),

    /// No file field in the form
    #[error("No file provided. Please select an image file.")]
    NoFileProvided,

    /// File field present but empty
    #[error("Selected file is empty. Please choose a valid image file.")]
    EmptyFile,

    /// Content type is not `image/*`
    #[error("Only image files are allowed (got {content_type:?})")]
    NotAnImage { content_type: String },

    /// File over the upload limit
    #[error("File size must be less than {}MB", max / (1024 * 1024))]
    FileTooLarge { max: usize, actual: Option<usize> },

    /// File name over the length limit
    #[error("File name is too long (max {max} characters)")]
    FileNameTooLong { max: usize },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields(_)
            | AuthError::InvalidRequestBody(_)
            | AuthError::PasswordTooShort { .. }
            | AuthError::InvalidFormData(_)
            | AuthError::NoFileProvided
            | AuthError::EmptyFile
            | AuthError::NotAnImage { .. }
            | AuthError::FileTooLarge { .. }
            | AuthError::FileNameTooLong { .. } => ErrorKind::BadRequest,
            AuthError::EmailAlreadyExists => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::Unauthenticated
            | AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::Expired
            | AuthError::UserNotFound => ErrorKind::Unauthorized,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Machine-readable code sent as `code` in the error envelope
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingFields(_) => "MISSING_FIELDS",
            AuthError::InvalidRequestBody(_) => "INVALID_REQUEST_BODY",
            AuthError::PasswordTooShort { .. } => "PASSWORD_TOO_SHORT",
            AuthError::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::Unauthenticated => "UNAUTHENTICATED",
            AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::Expired
            | AuthError::UserNotFound => "INVALID_TOKEN",
            AuthError::InvalidFormData(_) => "INVALID_FORM_DATA",
            AuthError::NoFileProvided => "NO_FILE_PROVIDED",
            AuthError::EmptyFile => "EMPTY_FILE",
            AuthError::NotAnImage { .. } => "NOT_AN_IMAGE",
            AuthError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AuthError::FileNameTooLong { .. } => "FILE_NAME_TOO_LONG",
            AuthError::Internal(_) => "INTERNAL",
        }
    }

    /// Whether this is one of the bearer-token failures
    pub fn is_token_failure(&self) -> bool {
        matches!(
            self,
            AuthError::MalformedToken
                | AuthError::InvalidSignature
                | AuthError::Expired
                | AuthError::UserNotFound
        )
    }

    /// Message shown to the caller
    fn public_message(&self) -> String {
        match self {
            _ if self.is_token_failure() => "Invalid or expired token".to_string(),
            AuthError::InvalidRequestBody(_) => "Invalid request body".to_string(),
            AuthError::InvalidFormData(_) => "Invalid form data".to_string(),
            AuthError::NotAnImage { .. } => {
                "Only image files are allowed (JPG, PNG, GIF, etc.)".to_string()
            }
            AuthError::FileTooLarge {
                actual: Some(actual),
                ..
            } => format!(
                "{self}. Current size: {:.2}MB",
                *actual as f64 / (1024.0 * 1024.0)
            ),
            AuthError::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(self) -> AppError {
        let err = AppError::new(self.kind(), self.public_message()).with_code(self.code());

        match self {
            AuthError::InvalidRequestBody(reason) | AuthError::InvalidFormData(reason) => {
                err.with_details(json!({ "reason": reason }))
            }
            AuthError::NotAnImage { ref content_type } => {
                err.with_details(json!({ "receivedType": content_type }))
            }
            AuthError::FileTooLarge { max, actual } => {
                err.with_details(json!({ "maxBytes": max, "actualBytes": actual }))
            }
            AuthError::FileNameTooLong { max } => err.with_details(json!({ "maxLength": max })),
            AuthError::Internal(_) => err.with_source(self),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidSignature => {
                tracing::warn!("Bearer token with invalid signature");
            }
            AuthError::MalformedToken | AuthError::Expired | AuthError::UserNotFound => {
                tracing::info!(reason = %self, "Bearer token rejected");
            }
            _ => {
                tracing::debug!(error = %self, code = self.code(), "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Malformed => AuthError::MalformedToken,
            TokenError::InvalidSignature => AuthError::InvalidSignature,
            TokenError::Expired => AuthError::Expired,
            TokenError::Encoding(msg) => AuthError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for AuthError {
    fn from(err: JsonRejection) -> Self {
        AuthError::InvalidRequestBody(err.body_text())
    }
}

impl From<MultipartRejection> for AuthError {
    fn from(err: MultipartRejection) -> Self {
        AuthError::InvalidFormData(err.body_text())
    }
}

impl AuthError {
    /// Map a failure while reading multipart fields
    ///
    /// The body limit layer surfaces here as a 413, reported against the
    /// configured upload limit.
    pub fn from_multipart_read(err: MultipartError, max_upload_bytes: usize) -> Self {
        Self::from_multipart_status(err.status(), err.body_text(), max_upload_bytes)
    }

    fn from_multipart_status(status: StatusCode, reason: String, max_upload_bytes: usize) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            return AuthError::FileTooLarge {
                max: max_upload_bytes,
                actual: None,
            };
        }
        AuthError::InvalidFormData(reason)
    }
}

impl From<platform::bearer::BearerError> for AuthError {
    fn from(_: platform::bearer::BearerError) -> Self {
        AuthError::Unauthenticated
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("Blocking task failed: {err}"))
    }
}
