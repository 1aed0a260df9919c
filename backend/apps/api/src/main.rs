//! API Server Entry Point
//!
//! Uses `anyhow` for startup errors. Request-level errors go through
//! `kernel::error::AppError`.

mod app;
mod settings;

use auth::{InMemoryUserRepository, seed_demo_user};
use axum::http::{HeaderValue, Method, header};
use kernel::envelope::set_diagnostics;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,weather=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    set_diagnostics(!settings.production);
    tracing::info!(
        production = settings.production,
        seed_demo_user = settings.seed_demo_user,
        "Settings loaded"
    );

    let repo = InMemoryUserRepository::new();
    if settings.seed_demo_user {
        seed_demo_user(&repo, &settings.auth).await?;
    }

    // CORS configuration
    let allowed_origins: Vec<HeaderValue> = settings
        .frontend_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    let app = app::build_app(repo, settings.auth, settings.weather)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("Listening on {}", settings.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
