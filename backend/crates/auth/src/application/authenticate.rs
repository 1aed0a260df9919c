//! Authenticate Use Case
//!
//! Resolves a bearer token to the user it was issued for.

use std::sync::Arc;

use crate::domain::entity::{claims::Claims, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::services::TokenCodec;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// The authenticated caller
///
/// Inserted into request extensions by the bearer middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub claims: Claims,
}

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    codec: Arc<TokenCodec>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, codec: Arc<TokenCodec>) -> Self {
        Self { user_repo, codec }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<CurrentUser> {
        self.execute_at(token, chrono::Utc::now().timestamp()).await
    }

    /// Same as [`execute`](Self::execute) with an explicit clock
    pub async fn execute_at(&self, token: &str, now: i64) -> AuthResult<CurrentUser> {
        let claims = self.codec.validate_at(token, now)?;

        // A correctly signed token always carries a canonical id
        let user_id: UserId = claims.sub.parse().map_err(|_| AuthError::MalformedToken)?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(CurrentUser { user, claims })
    }
}
