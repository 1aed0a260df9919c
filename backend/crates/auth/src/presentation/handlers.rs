//! HTTP Handlers

use axum::Extension;
use axum::Json;
use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use chrono::Utc;
use kernel::envelope::{Envelope, timestamp_now};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AdminSnapshotUseCase, CurrentUser, LoginInput, LoginUseCase, ProfileUseCase, RegisterInput,
    RegisterUseCase, UploadPictureUseCase, UploadedFile,
};
use crate::domain::repository::UserRepository;
use crate::domain::services::TokenCodec;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AccessedBy, AdminData, AdminResponse, AuthResponse, FileInfo, LoginRequest, ProfileResponse,
    RegisterRequest, RosterEntry, TokenInfo, UploadResponse, UserResponse, rfc3339,
};

/// Multipart field names accepted for the picture, in priority order
const FILE_FIELDS: [&str; 3] = ["profilePicture", "file", "image"];

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub codec: Arc<TokenCodec>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        let codec = TokenCodec::new(config.token_secret.clone(), config.token_ttl);
        Self {
            repo: Arc::new(repo),
            codec: Arc::new(codec),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<Envelope<AuthResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.codec.clone(),
        state.config.clone(),
    );

    let input = RegisterInput {
        name: req.name.unwrap_or_default(),
        email: req.email.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    };

    let output = use_case.execute(input).await?;

    Ok(Envelope::ok(
        "User registered successfully",
        AuthResponse {
            token: output.token,
            user: UserResponse::from(&output.user),
        },
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Envelope<AuthResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.codec.clone(),
        state.config.clone(),
    );

    let input = LoginInput {
        email: req.email.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    };

    let output = use_case.execute(input).await?;

    Ok(Envelope::ok(
        "Login successful",
        AuthResponse {
            token: output.token,
            user: UserResponse::from(&output.user),
        },
    ))
}

// ============================================================================
// Protected (requires bearer token)
// ============================================================================

/// GET /api/protected/profile
pub async fn profile<R>(
    State(state): State<AuthAppState<R>>,
    Extension(current): Extension<CurrentUser>,
) -> AuthResult<Envelope<ProfileResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let output = ProfileUseCase::new(state.repo.clone())
        .execute(current)
        .await?;

    Ok(Envelope::ok(
        "Protected data accessed successfully",
        ProfileResponse {
            user: UserResponse::from(&output.current.user),
            token_info: TokenInfo::from(&output.current.claims),
            server_time: timestamp_now(),
            protected_message: "This is protected data that requires authentication",
            total_users: output.total_users,
        },
    ))
}

/// GET /api/protected/admin
///
/// Any authenticated user may read this. There is no role model.
pub async fn admin_snapshot<R>(
    State(state): State<AuthAppState<R>>,
    Extension(current): Extension<CurrentUser>,
) -> AuthResult<Envelope<AdminResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let output = AdminSnapshotUseCase::new(state.repo.clone())
        .execute(current)
        .await?;

    Ok(Envelope::ok(
        "Admin data accessed successfully",
        AdminResponse {
            admin_data: AdminData {
                total_users: output.total_users,
                registered_users: output.users.iter().map(RosterEntry::from).collect(),
            },
            accessed_by: AccessedBy {
                user_id: output.accessed_by.user.user_id.to_string(),
                email: output.accessed_by.user.email.as_str().to_string(),
                timestamp: rfc3339(Utc::now()),
            },
        },
    ))
}

// ============================================================================
// Upload (requires bearer token)
// ============================================================================

/// POST /api/upload/profile-picture
pub async fn upload_profile_picture<R>(
    State(state): State<AuthAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AuthResult<Envelope<UploadResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let file = read_picture_field(multipart?, state.config.max_upload_bytes).await?;

    let output = UploadPictureUseCase::new(state.repo.clone(), state.config.clone())
        .execute(&current, file)
        .await?;

    Ok(Envelope::ok(
        "Profile picture uploaded successfully",
        UploadResponse {
            file_url: output.file_url,
            file_info: FileInfo {
                name: output.file_name,
                size: output.size,
                content_type: output.content_type,
                uploaded_at: rfc3339(output.uploaded_at),
            },
        },
    ))
}

/// Pick the file part with the highest-priority field name
///
/// Only parts that carry a file name count as files.
async fn read_picture_field(
    mut multipart: Multipart,
    max_upload_bytes: usize,
) -> AuthResult<Option<UploadedFile>> {
    let read_error = |err| AuthError::from_multipart_read(err, max_upload_bytes);
    let mut best: Option<(usize, UploadedFile)> = None;

    while let Some(field) = multipart.next_field().await.map_err(read_error)? {
        let Some(rank) = field
            .name()
            .and_then(|name| FILE_FIELDS.iter().position(|f| *f == name))
        else {
            continue;
        };
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        if best.as_ref().is_some_and(|(current, _)| *current <= rank) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(read_error)?;

        best = Some((
            rank,
            UploadedFile {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
            },
        ));
    }

    Ok(best.map(|(_, file)| file))
}
