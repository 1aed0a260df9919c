//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User, UserPatch};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Store a new user and assign its id
    ///
    /// Fails with `AuthError::EmailAlreadyExists` if the email is taken.
    /// The check and the write happen under one lock.
    async fn insert(&self, new_user: NewUser) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email (exact match)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Merge `patch` into an existing user
    ///
    /// Returns `false` if the id is unknown. Never creates a record.
    async fn update_fields(&self, user_id: &UserId, patch: UserPatch) -> AuthResult<bool>;

    /// Number of stored users
    async fn count(&self) -> AuthResult<usize>;

    /// All users ordered by id
    async fn list(&self) -> AuthResult<Vec<User>>;
}
