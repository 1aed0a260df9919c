//! Error conversions - IntoResponse implementations
//!
//! Renders [`AppError`] / [`Envelope`] as HTTP responses.

#[cfg(feature = "axum")]
use super::app_error::AppError;
#[cfg(feature = "axum")]
use crate::envelope::{Envelope, ErrorBody};

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(feature = "axum")]
impl<T: serde::Serialize> axum::response::IntoResponse for Envelope<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_error_response() {
        use axum::response::IntoResponse;

        let response = AppError::unauthorized("Invalid or expired token")
            .with_code("INVALID_TOKEN")
            .into_response();
        assert_eq!(response.status(), 401);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Unauthorized");
        assert_eq!(body["code"], "INVALID_TOKEN");
        assert_eq!(body["message"], "Invalid or expired token");
    }
}
