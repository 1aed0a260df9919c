//! In-Memory Repository Implementation
//!
//! Process-local credential store. Nothing survives a restart.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User, UserPatch};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct UserTable {
    /// Ordered so that `list()` comes out by id
    by_id: BTreeMap<UserId, User>,
    by_email: HashMap<String, UserId>,
}

/// In-memory user repository
///
/// Cloning is cheap and every clone sees the same data.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(UserTable::default())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: NewUser) -> AuthResult<User> {
        let mut table = self.table.write().await;

        if table.by_email.contains_key(new_user.email.as_str()) {
            return Err(AuthError::EmailAlreadyExists);
        }

        // Allocated under the write lock so a rejected insert burns no id
        let user_id = UserId::from_u64(self.next_id.fetch_add(1, Ordering::SeqCst));
        let user = User::from_new(user_id, new_user);

        table
            .by_email
            .insert(user.email.as_str().to_string(), user_id);
        table.by_id.insert(user_id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.by_id.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table
            .by_email
            .get(email.as_str())
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let table = self.table.read().await;
        Ok(table.by_email.contains_key(email.as_str()))
    }

    async fn update_fields(&self, user_id: &UserId, patch: UserPatch) -> AuthResult<bool> {
        let mut table = self.table.write().await;
        match table.by_id.get_mut(user_id) {
            Some(user) => {
                user.apply(patch);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> AuthResult<usize> {
        Ok(self.table.read().await.by_id.len())
    }

    async fn list(&self) -> AuthResult<Vec<User>> {
        Ok(self.table.read().await.by_id.values().cloned().collect())
    }
}
