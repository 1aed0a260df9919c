//! API DTOs

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::domain::WeatherReport;

pub const SOURCE: &str = "Mock Weather API";

/// Named-city request
///
/// `city` stays untyped so a number or `null` is reported as a missing city
/// rather than as a malformed body.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRequest {
    #[serde(default)]
    pub city: Option<serde_json::Value>,
}

impl CityRequest {
    pub fn city_str(&self) -> Option<&str> {
        self.city.as_ref().and_then(serde_json::Value::as_str)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub location: String,
    pub temperature: i32,
    pub description: String,
    pub humidity: u32,
    pub wind_speed: u32,
    pub last_updated: String,
}

impl From<WeatherReport> for WeatherData {
    fn from(report: WeatherReport) -> Self {
        Self {
            location: report.location,
            temperature: report.temperature,
            description: report.description,
            humidity: report.humidity,
            wind_speed: report.wind_speed,
            last_updated: report
                .last_updated
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherResponse {
    pub weather: WeatherData,
    pub source: &'static str,
}
