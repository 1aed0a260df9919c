//! Weather Router

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::application::config::WeatherConfig;
use crate::presentation::handlers::{self, WeatherAppState};

/// `GET` and `POST /third-party/weather`, relative to where it is nested
pub fn weather_router(config: WeatherConfig) -> Router {
    let state = WeatherAppState {
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/third-party/weather",
            get(handlers::current_weather).post(handlers::city_weather),
        )
        .with_state(state)
}
