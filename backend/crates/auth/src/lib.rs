//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits, token codec
//! - `application/` - Use cases and application services
//! - `infra/` - Repository implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and login with email + password
//! - Stateless HMAC-SHA256 bearer tokens (24h lifetime)
//! - Protected profile and admin snapshot endpoints
//! - Profile picture upload stored as a `data:` URI
//!
//! ## Security Model
//! - Passwords hashed with Argon2id on the blocking pool
//! - Unknown email and wrong password are indistinguishable
//! - All token failures surface as one generic 401

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::seed::seed_demo_user;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
