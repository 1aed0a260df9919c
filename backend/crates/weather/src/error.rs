//! Weather Error Types

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type WeatherResult<T> = Result<T, WeatherError>;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// `city` absent, `null`, or not a string
    #[error("City name is required and must be a string")]
    CityRequired,

    #[error("City name must be at least {min} characters long")]
    CityTooShort { min: usize },

    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// Simulated upstream outage
    #[error("Weather service is currently unavailable")]
    Unavailable,
}

impl WeatherError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::CityRequired
            | WeatherError::CityTooShort { .. }
            | WeatherError::InvalidRequestBody(_) => ErrorKind::BadRequest,
            WeatherError::Unavailable => ErrorKind::ServiceUnavailable,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WeatherError::CityRequired => "CITY_REQUIRED",
            WeatherError::CityTooShort { .. } => "CITY_TOO_SHORT",
            WeatherError::InvalidRequestBody(_) => "INVALID_REQUEST_BODY",
            WeatherError::Unavailable => "SERVICE_UNAVAILABLE",
        }
    }

    pub fn to_app_error(self) -> AppError {
        let message = match &self {
            WeatherError::InvalidRequestBody(_) => "Invalid request body".to_string(),
            other => other.to_string(),
        };
        AppError::new(self.kind(), message).with_code(self.code())
    }

    fn log(&self) {
        match self {
            WeatherError::Unavailable => tracing::warn!("Simulated weather outage"),
            _ => tracing::debug!(error = %self, code = self.code(), "Weather error"),
        }
    }
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for WeatherError {
    fn from(rejection: JsonRejection) -> Self {
        WeatherError::InvalidRequestBody(rejection.body_text())
    }
}
