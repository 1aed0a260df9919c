//! Process settings read from the environment

use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::MIN_TOKEN_SECRET_LENGTH;
use weather::WeatherConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug)]
pub struct Settings {
    pub production: bool,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub seed_demo_user: bool,
    pub auth: AuthConfig,
    pub weather: WeatherConfig,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup (the process environment in `main`)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let production = var("APP_ENV").is_some_and(|env| env.trim() == "production");

        let mut auth = match var("JWT_SECRET") {
            Some(secret) => AuthConfig::with_secret(secret.into_bytes()),
            None if production => bail!("JWT_SECRET must be set when APP_ENV=production"),
            None => {
                tracing::warn!("JWT_SECRET not set, using a random secret for this process");
                AuthConfig::development()
            }
        };
        if production && !auth.has_strong_secret() {
            bail!("JWT_SECRET must be at least {MIN_TOKEN_SECRET_LENGTH} bytes");
        }
        auth.password_pepper = var("PASSWORD_PEPPER").map(String::into_bytes);

        let mut weather = WeatherConfig::default();
        if let Some(rate) = var("WEATHER_FAILURE_RATE") {
            let rate: f64 = rate
                .trim()
                .parse()
                .with_context(|| format!("invalid WEATHER_FAILURE_RATE: {rate}"))?;
            weather = weather.with_failure_rate(rate);
        }

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse()
            .with_context(|| format!("invalid BIND_ADDR: {bind_addr}"))?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let seed_demo_user = match var("SEED_DEMO_USER") {
            None => true,
            Some(flag) => parse_flag(&flag)
                .with_context(|| format!("invalid SEED_DEMO_USER: {flag}"))?,
        };

        Ok(Self {
            production,
            bind_addr,
            frontend_origins,
            seed_demo_user,
            auth,
            weather,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
