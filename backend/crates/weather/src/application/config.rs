//! Application Configuration

use std::time::Duration;

/// Mock weather configuration
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Simulated upstream latency for the default-city lookup
    pub current_latency: Duration,
    /// Simulated upstream latency for a named-city lookup
    pub city_latency: Duration,
    /// Probability in `[0, 1]` that the default-city lookup fails
    pub failure_rate: f64,
    /// Known-city temperatures move within `-variation..variation`
    pub temperature_variation: i32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            current_latency: Duration::from_millis(800),
            city_latency: Duration::from_millis(1000),
            failure_rate: 0.05,
            temperature_variation: 3,
        }
    }
}

impl WeatherConfig {
    /// Same data, no waiting
    pub fn development() -> Self {
        Self {
            current_latency: Duration::ZERO,
            city_latency: Duration::ZERO,
            ..Default::default()
        }
    }

    /// No latency and no simulated outages
    pub fn reliable() -> Self {
        Self {
            failure_rate: 0.0,
            ..Self::development()
        }
    }

    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.current_latency, Duration::from_millis(800));
        assert_eq!(config.city_latency, Duration::from_millis(1000));
        assert_eq!(config.failure_rate, 0.05);
    }

    #[test]
    fn test_failure_rate_is_clamped() {
        assert_eq!(WeatherConfig::reliable().with_failure_rate(1.5).failure_rate, 1.0);
        assert_eq!(WeatherConfig::reliable().with_failure_rate(-1.0).failure_rate, 0.0);
        assert_eq!(
            WeatherConfig::reliable().with_failure_rate(f64::NAN).failure_rate,
            0.0
        );
    }
}
