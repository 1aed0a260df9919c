//! User Entity
//!
//! The single record the credential store keeps per account.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Sequential identifier (first account is 1)
    pub user_id: UserId,
    /// Login email, unique, case-sensitive
    pub email: Email,
    /// Display name
    pub name: UserName,
    /// Argon2id digest
    pub password: UserPassword,
    /// `data:<mime>;base64,...` URI of the uploaded picture
    pub profile_picture: Option<String>,
    /// Last profile update
    pub last_updated: Option<DateTime<Utc>>,
}

impl User {
    /// Build the stored record once the store has assigned an id
    pub fn from_new(user_id: UserId, new_user: NewUser) -> Self {
        Self {
            user_id,
            email: new_user.email,
            name: new_user.name,
            password: new_user.password,
            profile_picture: None,
            last_updated: None,
        }
    }

    /// Merge the fields present in `patch`, leaving the rest untouched
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(picture) = patch.profile_picture {
            self.profile_picture = Some(picture);
        }
        if let Some(at) = patch.last_updated {
            self.last_updated = Some(at);
        }
    }
}

/// A user that has not been stored yet
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: UserName,
    pub password: UserPassword,
}

/// Partial profile update
///
/// Only the picture and its timestamp change after registration.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub profile_picture: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn sample() -> User {
        let raw = RawPassword::new("demo123".to_string());
        User::from_new(
            UserId::from_u64(1),
            NewUser {
                email: Email::new("demo@example.com").unwrap(),
                name: UserName::new("Demo User").unwrap(),
                password: UserPassword::from_raw(&raw, None).unwrap(),
            },
        )
    }

    #[test]
    fn test_from_new_has_no_picture() {
        let user = sample();
        assert_eq!(user.user_id.as_u64(), 1);
        assert!(user.profile_picture.is_none());
        assert!(user.last_updated.is_none());
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let mut user = sample();
        let now = Utc::now();
        user.apply(UserPatch {
            profile_picture: Some("data:image/png;base64,AAAA".to_string()),
            last_updated: Some(now),
        });

        assert_eq!(user.name.as_str(), "Demo User");
        assert_eq!(
            user.profile_picture.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert_eq!(user.last_updated, Some(now));

        user.apply(UserPatch::default());
        assert!(user.profile_picture.is_some());
    }
}
