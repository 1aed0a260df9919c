//! Weather domain
//!
//! A reading is either a known city's base values nudged by a small random
//! offset, or, for any other city, values drawn from fixed ranges.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{WeatherError, WeatherResult};

/// Minimum length of a normalized city name, in characters
pub const MIN_CITY_LENGTH: usize = 2;

/// City used by the parameterless lookup
pub const DEFAULT_CITY: &str = "new york";

/// Descriptions for cities outside the table
pub const DESCRIPTIONS: [&str; 6] = [
    "Sunny",
    "Cloudy",
    "Rainy",
    "Partly Cloudy",
    "Clear",
    "Overcast",
];

/// Base values for a known city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityProfile {
    pub key: &'static str,
    pub location: &'static str,
    pub temperature: i32,
    pub description: &'static str,
    pub humidity: u32,
    pub wind_speed: u32,
}

pub const KNOWN_CITIES: [CityProfile; 5] = [
    CityProfile {
        key: "new york",
        location: "New York, NY",
        temperature: 22,
        description: "Partly Cloudy",
        humidity: 65,
        wind_speed: 12,
    },
    CityProfile {
        key: "london",
        location: "London, UK",
        temperature: 15,
        description: "Rainy",
        humidity: 80,
        wind_speed: 8,
    },
    CityProfile {
        key: "tokyo",
        location: "Tokyo, Japan",
        temperature: 28,
        description: "Sunny",
        humidity: 55,
        wind_speed: 5,
    },
    CityProfile {
        key: "paris",
        location: "Paris, France",
        temperature: 18,
        description: "Cloudy",
        humidity: 70,
        wind_speed: 10,
    },
    CityProfile {
        key: "sydney",
        location: "Sydney, Australia",
        temperature: 25,
        description: "Clear",
        humidity: 60,
        wind_speed: 15,
    },
];

pub fn find_city(key: &str) -> Option<&'static CityProfile> {
    KNOWN_CITIES.iter().find(|city| city.key == key)
}

/// A validated city query
///
/// `display` keeps the caller's spelling (trimmed); `key` is the lowercase
/// form used for table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery {
    display: String,
    key: String,
}

impl CityQuery {
    pub fn parse(raw: &str) -> WeatherResult<Self> {
        let display = raw.trim();
        let key = display.to_lowercase();
        if key.chars().count() < MIN_CITY_LENGTH {
            return Err(WeatherError::CityTooShort {
                min: MIN_CITY_LENGTH,
            });
        }
        Ok(Self {
            display: display.to_string(),
            key,
        })
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Location label for a city outside the table: first letter upper-cased
    pub fn capitalized(&self) -> String {
        let mut chars = self.display.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location: String,
    pub temperature: i32,
    pub description: String,
    pub humidity: u32,
    pub wind_speed: u32,
    pub last_updated: DateTime<Utc>,
}

impl WeatherReport {
    /// Known city with the temperature shifted by `-variation..variation`
    pub fn for_profile<R: Rng>(
        profile: &CityProfile,
        variation: i32,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Self {
        let offset = if variation > 0 {
            rng.random_range(-variation..variation)
        } else {
            0
        };
        Self {
            location: profile.location.to_string(),
            temperature: profile.temperature + offset,
            description: profile.description.to_string(),
            humidity: profile.humidity,
            wind_speed: profile.wind_speed,
            last_updated: now,
        }
    }

    /// Any other city: every value drawn at random
    pub fn generated<R: Rng>(query: &CityQuery, rng: &mut R, now: DateTime<Utc>) -> Self {
        let description = DESCRIPTIONS.choose(rng).copied().unwrap_or("Clear");
        Self {
            location: query.capitalized(),
            temperature: rng.random_range(10..=34),
            description: description.to_string(),
            humidity: rng.random_range(30..=79),
            wind_speed: rng.random_range(2..=21),
            last_updated: now,
        }
    }

    pub fn for_query<R: Rng>(
        query: &CityQuery,
        variation: i32,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Self {
        match find_city(query.key()) {
            Some(profile) => Self::for_profile(profile, variation, rng, now),
            None => Self::generated(query, rng, now),
        }
    }
}
