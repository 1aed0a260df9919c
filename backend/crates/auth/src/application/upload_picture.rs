//! Upload Profile Picture Use Case
//!
//! Validates an uploaded image and stores it on the caller's record as a
//! `data:` URI.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::authenticate::CurrentUser;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::UserPatch;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// File part extracted from the multipart body
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    /// Declared MIME type, empty if the client sent none
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Upload output
#[derive(Debug, Clone)]
pub struct UploadPictureOutput {
    pub file_url: String,
    pub file_name: String,
    pub size: usize,
    pub content_type: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Upload profile picture use case
pub struct UploadPictureUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> UploadPictureUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(
        &self,
        current: &CurrentUser,
        file: Option<UploadedFile>,
    ) -> AuthResult<UploadPictureOutput> {
        let file = file.ok_or(AuthError::NoFileProvided)?;
        self.validate(&file)?;

        let mime = mime_essence(&file.content_type).to_string();
        let file_url = format!(
            "data:{mime};base64,{}",
            platform::crypto::to_base64(&file.bytes)
        );
        let uploaded_at = Utc::now();

        let patch = UserPatch {
            profile_picture: Some(file_url.clone()),
            last_updated: Some(uploaded_at),
        };

        // The token outlived its subject
        if !self
            .user_repo
            .update_fields(&current.user.user_id, patch)
            .await?
        {
            return Err(AuthError::UserNotFound);
        }

        tracing::info!(
            user_id = %current.user.user_id,
            file_name = %file.file_name,
            size = file.bytes.len(),
            content_type = %mime,
            "Profile picture uploaded"
        );

        Ok(UploadPictureOutput {
            file_url,
            size: file.bytes.len(),
            file_name: file.file_name,
            content_type: mime,
            uploaded_at,
        })
    }

    /// Checks run in this order; the first failure wins
    fn validate(&self, file: &UploadedFile) -> AuthResult<()> {
        if file.bytes.is_empty() {
            return Err(AuthError::EmptyFile);
        }

        if !mime_essence(&file.content_type).starts_with("image/") {
            return Err(AuthError::NotAnImage {
                content_type: file.content_type.clone(),
            });
        }

        if file.bytes.len() > self.config.max_upload_bytes {
            return Err(AuthError::FileTooLarge {
                max: self.config.max_upload_bytes,
                actual: Some(file.bytes.len()),
            });
        }

        if file.file_name.chars().count() > self.config.max_file_name_length {
            return Err(AuthError::FileNameTooLong {
                max: self.config.max_file_name_length,
            });
        }

        Ok(())
    }
}

/// `type/subtype` without parameters
///
/// Anything after `;` or `,` would corrupt the `data:` URI.
fn mime_essence(content_type: &str) -> &str {
    content_type
        .split([';', ','])
        .next()
        .unwrap_or_default()
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::authenticate::AuthenticateUseCase;
    use crate::application::seed::seed_demo_user;
    use crate::domain::services::TokenCodec;
    use crate::infra::memory::InMemoryUserRepository;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    async fn setup() -> (
        UploadPictureUseCase<InMemoryUserRepository>,
        InMemoryUserRepository,
        CurrentUser,
    ) {
        let config = AuthConfig::development();
        let repo = InMemoryUserRepository::new();
        let demo = seed_demo_user(&repo, &config).await.unwrap();

        let codec = Arc::new(TokenCodec::new(
            config.token_secret.clone(),
            config.token_ttl,
        ));
        let minted = codec.mint(&demo.user_id, &demo.email).unwrap();
        let current = AuthenticateUseCase::new(Arc::new(repo.clone()), codec)
            .execute(&minted.token)
            .await
            .unwrap();

        (
            UploadPictureUseCase::new(Arc::new(repo.clone()), Arc::new(config)),
            repo,
            current,
        )
    }

    fn png(size: usize) -> UploadedFile {
        let mut bytes = PNG_MAGIC.to_vec();
        bytes.resize(size, 0);
        UploadedFile {
            file_name: "avatar.png".into(),
            content_type: "image/png".into(),
            bytes,
        }
    }

    #[tokio::test]
    async fn test_png_is_stored() {
        let (uc, repo, current) = setup().await;
        let output = uc.execute(&current, Some(png(1024))).await.unwrap();

        assert!(output.file_url.starts_with("data:image/png;base64,iVBORw0KGgo"));
        assert_eq!(output.size, 1024);
        assert_eq!(output.file_name, "avatar.png");

        let stored = repo.find_by_id(&current.user.user_id).await.unwrap().unwrap();
        assert_eq!(stored.profile_picture.as_deref(), Some(output.file_url.as_str()));
        assert_eq!(stored.last_updated, Some(output.uploaded_at));
    }

    #[tokio::test]
    async fn test_content_type_parameters_are_dropped() {
        let (uc, _, current) = setup().await;
        let file = UploadedFile {
            content_type: "image/png;x,y".into(),
            ..png(16)
        };
        let output = uc.execute(&current, Some(file)).await.unwrap();

        assert_eq!(output.content_type, "image/png");
        let (header, payload) = output.file_url.split_once(',').unwrap();
        assert_eq!(header, "data:image/png;base64");
        assert_eq!(payload, platform::crypto::to_base64(&png(16).bytes));
    }

    #[test]
    fn test_mime_essence() {
        assert_eq!(mime_essence("image/png"), "image/png");
        assert_eq!(mime_essence("image/jpeg; charset=binary"), "image/jpeg");
        assert_eq!(mime_essence(" image/gif ,x"), "image/gif");
        assert_eq!(mime_essence(""), "");
    }

    #[tokio::test]
    async fn test_no_file() {
        let (uc, _, current) = setup().await;
        let err = uc.execute(&current, None).await.unwrap_err();
        assert!(matches!(err, AuthError::NoFileProvided));
    }

    #[tokio::test]
    async fn test_empty_file() {
        let (uc, _, current) = setup().await;
        let err = uc.execute(&current, Some(png(0))).await.unwrap_err();
        assert!(matches!(err, AuthError::EmptyFile));
    }

    #[tokio::test]
    async fn test_text_file_is_not_an_image() {
        let (uc, repo, current) = setup().await;
        let file = UploadedFile {
            file_name: "notes.txt".into(),
            content_type: "text/plain".into(),
            bytes: b"0123456789".to_vec(),
        };
        let err = uc.execute(&current, Some(file)).await.unwrap_err();
        assert!(matches!(err, AuthError::NotAnImage { .. }));

        let stored = repo.find_by_id(&current.user.user_id).await.unwrap().unwrap();
        assert!(stored.profile_picture.is_none());
    }

    #[tokio::test]
    async fn test_file_too_large() {
        let (uc, _, current) = setup().await;
        let err = uc
            .execute(&current, Some(png(6 * 1024 * 1024)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AuthError::FileTooLarge {
                actual: Some(6_291_456),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_exactly_at_limit_is_accepted() {
        let (uc, _, current) = setup().await;
        assert!(uc.execute(&current, Some(png(5 * 1024 * 1024))).await.is_ok());
    }

    #[tokio::test]
    async fn test_file_name_too_long() {
        let (uc, _, current) = setup().await;
        let mut file = png(16);
        file.file_name = format!("{}.png", "a".repeat(100));
        let err = uc.execute(&current, Some(file)).await.unwrap_err();
        assert!(matches!(err, AuthError::FileNameTooLong { max: 100 }));
    }

    #[tokio::test]
    async fn test_type_is_checked_before_size() {
        let (uc, _, current) = setup().await;
        let file = UploadedFile {
            file_name: "big.bin".into(),
            content_type: "application/octet-stream".into(),
            bytes: vec![1; 6 * 1024 * 1024],
        };
        let err = uc.execute(&current, Some(file)).await.unwrap_err();
        assert!(matches!(err, AuthError::NotAnImage { .. }));
    }
}
