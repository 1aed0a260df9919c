use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use weather::{WeatherConfig, weather_router};

// ─── Test helpers ───────────────────────────────────────────────────────

const URI: &str = "/api/third-party/weather";

fn app(config: WeatherConfig) -> Router {
    Router::new().nest("/api", weather_router(config))
}

fn post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(URI)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(URI)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ─── GET ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_returns_new_york() {
    let (status, body) = send(app(WeatherConfig::reliable()), get()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["statusCode"], 200);
    assert_eq!(body["message"], "Weather data retrieved successfully");
    assert_eq!(body["source"], "Mock Weather API");

    let weather = &body["weather"];
    assert_eq!(weather["location"], "New York, NY");
    assert_eq!(weather["description"], "Partly Cloudy");
    assert_eq!(weather["humidity"], 65);
    assert_eq!(weather["windSpeed"], 12);
    let temperature = weather["temperature"].as_i64().unwrap();
    assert!((19..=24).contains(&temperature));
    assert!(weather["lastUpdated"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn get_simulated_outage() {
    let config = WeatherConfig::reliable().with_failure_rate(1.0);
    let (status, body) = send(app(config), get()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Service Unavailable");
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
    assert_eq!(body["message"], "Weather service is currently unavailable");
}

// ─── POST ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn post_known_city() {
    let (status, body) = send(
        app(WeatherConfig::reliable()),
        post(&json!({ "city": "  London " }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Weather data for London retrieved successfully");
    assert_eq!(body["weather"]["location"], "London, UK");
    assert_eq!(body["weather"]["description"], "Rainy");
    let temperature = body["weather"]["temperature"].as_i64().unwrap();
    assert!((12..=17).contains(&temperature));
}

#[tokio::test]
async fn post_unknown_city_is_generated() {
    let (status, body) = send(
        app(WeatherConfig::reliable()),
        post(&json!({ "city": "oslo" }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let weather = &body["weather"];
    assert_eq!(weather["location"], "Oslo");
    assert!((10..=34).contains(&weather["temperature"].as_i64().unwrap()));
    assert!((30..=79).contains(&weather["humidity"].as_i64().unwrap()));
    assert!((2..=21).contains(&weather["windSpeed"].as_i64().unwrap()));
}

#[tokio::test]
async fn post_city_validation() {
    let cases = [
        (json!({}), "City name is required and must be a string"),
        (json!({ "city": null }), "City name is required and must be a string"),
        (json!({ "city": 12 }), "City name is required and must be a string"),
        (json!({ "city": " x " }), "City name must be at least 2 characters long"),
    ];

    for (payload, message) in cases {
        let (status, body) = send(app(WeatherConfig::reliable()), post(&payload.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
        assert_eq!(body["message"], message, "payload {payload}");
    }
}

#[tokio::test]
async fn post_malformed_json() {
    let (status, body) = send(app(WeatherConfig::reliable()), post("{\"city\":")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn post_ignores_failure_rate() {
    let config = WeatherConfig::reliable().with_failure_rate(1.0);
    let (status, _) = send(app(config), post(&json!({ "city": "tokyo" }).to_string())).await;
    assert_eq!(status, StatusCode::OK);
}
