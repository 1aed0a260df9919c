//! User ID
//!
//! Sequential identifier assigned by the credential store. Rendered as a
//! decimal string everywhere it leaves the process (`"1"`, `"2"`, ...).

use kernel::id::Id;

pub struct UserMarker;
pub type UserId = Id<UserMarker>;
