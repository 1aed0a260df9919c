//! Token Claims

use serde::{Deserialize, Serialize};

/// Claims carried in a bearer token payload
///
/// `iat` and `exp` are Unix seconds. A token is usable while `now < exp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id in decimal form
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
