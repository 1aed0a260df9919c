//! Demo account seeding

use crate::application::config::AuthConfig;
use crate::application::hashing::hash_password;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::RawPassword,
};
use crate::error::{AuthError, AuthResult};

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_NAME: &str = "Demo User";
pub const DEMO_PASSWORD: &str = "demo123";

/// Insert the demo account
///
/// On an empty store the demo user gets id 1.
pub async fn seed_demo_user<U>(repo: &U, config: &AuthConfig) -> AuthResult<User>
where
    U: UserRepository,
{
    let email = Email::new(DEMO_EMAIL).map_err(|e| AuthError::Internal(e.to_string()))?;
    let name = UserName::new(DEMO_NAME).map_err(|e| AuthError::Internal(e.to_string()))?;
    let password = hash_password(
        RawPassword::new(DEMO_PASSWORD.to_string()),
        config.password_pepper.clone(),
    )
    .await?;

    let user = repo
        .insert(NewUser {
            email,
            name,
            password,
        })
        .await?;

    tracing::info!(user_id = %user.user_id, email = DEMO_EMAIL, "Demo user seeded");
    Ok(user)
}
