//! Auth Router

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::memory::InMemoryUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_bearer;

/// Create the Auth router with the in-memory repository
pub fn auth_router(repo: InMemoryUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// Routes (relative to where the router is nested):
/// - `POST /auth/register`, `POST /auth/login`
/// - `GET /protected/profile`, `GET /protected/admin` (bearer)
/// - `POST /upload/profile-picture` (bearer, multipart)
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState::new(repo, config);
    let upload_limit = state.config.upload_body_limit();

    let protected = Router::new()
        .route("/protected/profile", get(handlers::profile::<R>))
        .route("/protected/admin", get(handlers::admin_snapshot::<R>))
        .route(
            "/upload/profile-picture",
            post(handlers::upload_profile_picture::<R>).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer::<R>,
        ));

    Router::new()
        .route("/auth/register", post(handlers::register::<R>))
        .route("/auth/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}
