//! Router assembly

use auth::{AuthConfig, InMemoryUserRepository, auth_router};
use axum::{Json, Router, routing::get};
use kernel::envelope::timestamp_now;
use kernel::error::app_error::AppError;
use serde::Serialize;
use weather::{WeatherConfig, weather_router};

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    timestamp: String,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "OK",
        timestamp: timestamp_now(),
    })
}

async fn not_found() -> AppError {
    AppError::not_found("Route not found").with_code("NOT_FOUND")
}

/// Every route, nested under `/api`
pub fn build_app(
    repo: InMemoryUserRepository,
    auth_config: AuthConfig,
    weather_config: WeatherConfig,
) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .merge(auth_router(repo, auth_config))
        .merge(weather_router(weather_config));

    Router::new().nest("/api", api).fallback(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        build_app(
            InMemoryUserRepository::new(),
            AuthConfig::with_secret(b"api-test-secret-api-test-secret-0".to_vec()),
            WeatherConfig::reliable(),
        )
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let req = Request::get("/api/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
    }

    #[tokio::test]
    async fn test_unknown_route_uses_envelope() {
        let req = Request::get("/api/nope").body(Body::empty()).unwrap();
        let (status, body) = send(app(), req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["statusCode"], 404);
    }

    #[tokio::test]
    async fn test_feature_routers_are_mounted() {
        let req = Request::post("/api/auth/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "name": "Ada", "email": "ada@example.com", "password": "secret1" })
                    .to_string(),
            ))
            .unwrap();
        let (status, body) = send(app(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["id"], "1");

        let req = Request::get("/api/third-party/weather")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "Mock Weather API");

        let req = Request::get("/api/protected/profile")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app(), req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
