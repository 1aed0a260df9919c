//! Login Use Case
//!
//! Checks email + password and issues a bearer token.

use std::sync::Arc;

use crate::application::AuthOutput;
use crate::application::config::AuthConfig;
use crate::application::hashing::verify_password;
use crate::domain::repository::UserRepository;
use crate::domain::services::TokenCodec;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    codec: Arc<TokenCodec>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, codec: Arc<TokenCodec>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            codec,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthOutput> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingFields("Email and password are required"));
        }

        // An address that cannot exist is just another unknown account
        let user = match Email::new(input.email) {
            Ok(email) => self.user_repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let raw_password = RawPassword::new(input.password);
        let stored = user.as_ref().map(|u| u.password.clone());
        let valid =
            verify_password(raw_password, stored, self.config.password_pepper.clone()).await?;

        let user = match user {
            Some(user) if valid => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let minted = self.codec.mint(&user.user_id, &user.email)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(AuthOutput {
            token: minted.token,
            user,
        })
    }
}
