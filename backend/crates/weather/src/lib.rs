//! Weather Backend Module
//!
//! Simulated third-party weather API. There is no upstream: readings come
//! from a small table of known cities plus random variation, behind an
//! artificial delay and an occasional simulated outage.
//!
//! - `domain` - City names, readings, and how readings are generated
//! - `application/` - Lookup use case and configuration
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::WeatherConfig;
pub use error::{WeatherError, WeatherResult};
pub use presentation::router::weather_router;
