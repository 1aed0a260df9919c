//! Register Use Case
//!
//! Creates a new account and signs the caller in.

use std::sync::Arc;

use crate::application::AuthOutput;
use crate::application::config::AuthConfig;
use crate::application::hashing::hash_password;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::services::TokenCodec;
use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::RawPassword,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    codec: Arc<TokenCodec>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthOutput> {
        const MISSING: AuthError = AuthError::MissingFields("All fields are required");

        if input.password.is_empty() {
            return Err(MISSING);
        }
        // Only presence is checked; email and name are stored as typed
        let email = Email::new(input.email).map_err(|_| MISSING)?;
        let name = UserName::new(input.name).map_err(|_| MISSING)?;

        let raw_password = RawPassword::for_signup(input.password, self.config.min_password_length)?;

        // Cheap pre-check so a taken email does not cost a hash.
        // insert() re-checks under the write lock.
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyExists);
        }

        let password = hash_password(raw_password, self.config.password_pepper.clone()).await?;

        let user = self
            .user_repo
            .insert(NewUser {
                email,
                name,
                password,
            })
            .await?;

        let minted = self.codec.mint(&user.user_id, &user.email)?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(AuthOutput {
            token: minted.token,
            user,
        })
    }
}
