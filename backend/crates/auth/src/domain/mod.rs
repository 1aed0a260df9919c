//! Domain Layer
//!
//! Contains entities, value objects, repository traits and the token codec.

pub mod entity;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::{
    claims::Claims,
    user::{NewUser, User, UserPatch},
};
pub use repository::UserRepository;
pub use services::{TokenCodec, TokenError};
