//! Profile Use Case

use std::sync::Arc;

use crate::application::authenticate::CurrentUser;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

/// Profile view of the caller
pub struct ProfileOutput {
    pub current: CurrentUser,
    pub total_users: usize,
}

/// Profile use case
pub struct ProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, current: CurrentUser) -> AuthResult<ProfileOutput> {
        let total_users = self.user_repo.count().await?;

        tracing::debug!(user_id = %current.user.user_id, "Profile accessed");

        Ok(ProfileOutput {
            current,
            total_users,
        })
    }
}
