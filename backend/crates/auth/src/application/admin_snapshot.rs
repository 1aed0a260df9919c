//! Admin Snapshot Use Case
//!
//! Any authenticated user may read the snapshot. There are no roles.

use std::sync::Arc;

use crate::application::authenticate::CurrentUser;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

/// Admin snapshot
pub struct AdminSnapshotOutput {
    pub total_users: usize,
    /// Ordered by id
    pub users: Vec<User>,
    pub accessed_by: CurrentUser,
}

/// Admin snapshot use case
pub struct AdminSnapshotUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> AdminSnapshotUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, current: CurrentUser) -> AuthResult<AdminSnapshotOutput> {
        let users = self.user_repo.list().await?;

        tracing::info!(
            user_id = %current.user.user_id,
            total_users = users.len(),
            "Admin snapshot accessed"
        );

        Ok(AdminSnapshotOutput {
            total_users: users.len(),
            users,
            accessed_by: current,
        })
    }
}
