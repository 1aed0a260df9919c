//! Auth Middleware
//!
//! Bearer-token gate for protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer;

use crate::application::AuthenticateUseCase;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Middleware that requires a valid bearer token
///
/// On success the resolved [`CurrentUser`](crate::application::CurrentUser)
/// is stored in the request extensions.
pub async fn require_bearer<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(req.headers())?.to_string();

    let current = AuthenticateUseCase::new(state.repo.clone(), state.codec.clone())
        .execute(&token)
        .await?;

    req.extensions_mut().insert(current);

    Ok(next.run(req).await)
}
