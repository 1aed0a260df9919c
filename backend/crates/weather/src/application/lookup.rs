//! Weather Lookup Use Case

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

use crate::application::config::WeatherConfig;
use crate::domain::{CityQuery, DEFAULT_CITY, WeatherReport, find_city};
use crate::error::{WeatherError, WeatherResult};

pub struct LookupOutput {
    pub report: WeatherReport,
    /// The city as the caller wrote it, `None` for the default lookup
    pub requested: Option<String>,
}

pub struct WeatherLookupUseCase {
    config: Arc<WeatherConfig>,
}

impl WeatherLookupUseCase {
    pub fn new(config: Arc<WeatherConfig>) -> Self {
        Self { config }
    }

    /// Default-city reading, subject to simulated outages
    pub async fn current(&self) -> WeatherResult<LookupOutput> {
        tokio::time::sleep(self.config.current_latency).await;

        // ThreadRng is !Send, so it must not live across an await
        let report = {
            let mut rng = rand::rng();
            if rng.random::<f64>() < self.config.failure_rate {
                return Err(WeatherError::Unavailable);
            }
            let profile = find_city(DEFAULT_CITY).ok_or(WeatherError::Unavailable)?;
            WeatherReport::for_profile(
                profile,
                self.config.temperature_variation,
                &mut rng,
                Utc::now(),
            )
        };

        tracing::debug!(location = %report.location, "Weather served");
        Ok(LookupOutput {
            report,
            requested: None,
        })
    }

    /// Reading for a caller-supplied city
    ///
    /// `None` means the request carried no usable city string.
    pub async fn for_city(&self, city: Option<&str>) -> WeatherResult<LookupOutput> {
        let raw = city.ok_or(WeatherError::CityRequired)?;
        let query = CityQuery::parse(raw)?;

        tokio::time::sleep(self.config.city_latency).await;

        let report = WeatherReport::for_query(
            &query,
            self.config.temperature_variation,
            &mut rand::rng(),
            Utc::now(),
        );

        tracing::debug!(city = query.key(), location = %report.location, "Weather served");
        Ok(LookupOutput {
            report,
            requested: Some(query.display().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn use_case(config: WeatherConfig) -> WeatherLookupUseCase {
        WeatherLookupUseCase::new(Arc::new(config))
    }

    #[tokio::test]
    async fn test_current_defaults_to_new_york() {
        let output = use_case(WeatherConfig::reliable()).current().await.unwrap();
        assert_eq!(output.report.location, "New York, NY");
        assert!((19..=24).contains(&output.report.temperature));
        assert!(output.requested.is_none());
    }

    #[tokio::test]
    async fn test_current_outage() {
        let result = use_case(WeatherConfig::reliable().with_failure_rate(1.0))
            .current()
            .await;
        assert!(matches!(result, Err(WeatherError::Unavailable)));
    }

    #[tokio::test]
    async fn test_city_outage_does_not_apply() {
        let output = use_case(WeatherConfig::reliable().with_failure_rate(1.0))
            .for_city(Some("london"))
            .await
            .unwrap();
        assert_eq!(output.report.location, "London, UK");
    }

    #[tokio::test]
    async fn test_for_city_validation() {
        let use_case = use_case(WeatherConfig::reliable());
        assert!(matches!(
            use_case.for_city(None).await,
            Err(WeatherError::CityRequired)
        ));
        assert!(matches!(
            use_case.for_city(Some(" a ")).await,
            Err(WeatherError::CityTooShort { .. })
        ));
    }

    #[tokio::test]
    async fn test_for_city_keeps_requested_spelling() {
        let output = use_case(WeatherConfig::reliable())
            .for_city(Some(" Tokyo "))
            .await
            .unwrap();
        assert_eq!(output.requested.as_deref(), Some("Tokyo"));
        assert_eq!(output.report.location, "Tokyo, Japan");
    }

    #[tokio::test]
    async fn test_latency_is_simulated() {
        let config = WeatherConfig {
            city_latency: std::time::Duration::from_millis(30),
            ..WeatherConfig::reliable()
        };
        let started = std::time::Instant::now();
        use_case(config).for_city(Some("paris")).await.unwrap();
        assert!(started.elapsed() >= std::time::Duration::from_millis(30));
    }
}
