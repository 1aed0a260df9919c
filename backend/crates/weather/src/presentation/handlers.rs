//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use kernel::envelope::Envelope;

use crate::application::config::WeatherConfig;
use crate::application::lookup::{LookupOutput, WeatherLookupUseCase};
use crate::error::WeatherResult;
use crate::presentation::dto::{CityRequest, SOURCE, WeatherResponse};

#[derive(Clone)]
pub struct WeatherAppState {
    pub config: Arc<WeatherConfig>,
}

fn respond(message: String, output: LookupOutput) -> Envelope<WeatherResponse> {
    Envelope::ok(
        message,
        WeatherResponse {
            weather: output.report.into(),
            source: SOURCE,
        },
    )
}

/// GET /api/third-party/weather
pub async fn current_weather(
    State(state): State<WeatherAppState>,
) -> WeatherResult<Envelope<WeatherResponse>> {
    let output = WeatherLookupUseCase::new(state.config.clone())
        .current()
        .await?;

    Ok(respond(
        "Weather data retrieved successfully".to_string(),
        output,
    ))
}

/// POST /api/third-party/weather
pub async fn city_weather(
    State(state): State<WeatherAppState>,
    payload: Result<Json<CityRequest>, JsonRejection>,
) -> WeatherResult<Envelope<WeatherResponse>> {
    let Json(req) = payload?;

    let output = WeatherLookupUseCase::new(state.config.clone())
        .for_city(req.city_str())
        .await?;

    let message = format!(
        "Weather data for {} retrieved successfully",
        output.requested.as_deref().unwrap_or_default()
    );
    Ok(respond(message, output))
}
