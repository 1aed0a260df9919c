//! Password work on the blocking pool
//!
//! Argon2id takes tens of milliseconds of CPU per call. Running it inline
//! would stall every other request scheduled on the same runtime worker.

use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::AuthResult;

/// Hash a password on the blocking pool
pub async fn hash_password(raw: RawPassword, pepper: Option<Vec<u8>>) -> AuthResult<UserPassword> {
    tokio::task::spawn_blocking(move || UserPassword::from_raw(&raw, pepper.as_deref())).await?
}

/// Verify a password on the blocking pool
///
/// With `stored == None` a dummy verification still runs, so an unknown
/// account costs as much as a wrong password.
pub async fn verify_password(
    raw: RawPassword,
    stored: Option<UserPassword>,
    pepper: Option<Vec<u8>>,
) -> AuthResult<bool> {
    let valid = tokio::task::spawn_blocking(move || match stored {
        Some(hash) => hash.verify(&raw, pepper.as_deref()),
        None => UserPassword::verify_dummy(&raw, pepper.as_deref()),
    })
    .await?;
    Ok(valid)
}
