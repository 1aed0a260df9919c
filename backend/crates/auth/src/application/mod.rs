//! Application Layer
//!
//! Use cases and application services.

pub mod admin_snapshot;
pub mod authenticate;
pub mod config;
pub mod hashing;
pub mod login;
pub mod profile;
pub mod register;
pub mod seed;
pub mod upload_picture;

// Re-exports
pub use admin_snapshot::{AdminSnapshotOutput, AdminSnapshotUseCase};
pub use authenticate::{AuthenticateUseCase, CurrentUser};
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use profile::{ProfileOutput, ProfileUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use seed::{DEMO_EMAIL, DEMO_NAME, DEMO_PASSWORD, seed_demo_user};
pub use upload_picture::{UploadPictureOutput, UploadPictureUseCase, UploadedFile};

/// Output shared by registration and login
#[derive(Debug)]
pub struct AuthOutput {
    pub token: String,
    pub user: crate::domain::entity::user::User,
}
