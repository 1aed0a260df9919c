//! Application Layer

pub mod config;
pub mod lookup;

pub use config::WeatherConfig;
pub use lookup::{LookupOutput, WeatherLookupUseCase};
