//! User Name Value Object
//!
//! 表示名（プロフィールに表示される名前）。ログインには使用しない。
//! 一意性は求めない。
//!
//! ## 設計方針
//! - 入力された文字列をそのまま保持する（正規化・トリムは行わない）
//!
//! ## 不変条件
//! - 空文字列でない

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when display name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    Empty,
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Name cannot be empty"),
        }
    }
}

impl std::error::Error for UserNameError {}

/// Display name, exactly as submitted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl Into<String>) -> Result<Self, UserNameError> {
        let name = input.into();
        if name.is_empty() {
            return Err(UserNameError::Empty);
        }
        Ok(Self(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_kept_verbatim() {
        for raw in ["Demo User", "山田 太郎", "  Ｄｅｍｏ  ", "   ", "x"] {
            assert_eq!(UserName::new(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn test_long_names_are_accepted() {
        let long = "a".repeat(101);
        assert_eq!(UserName::new(long.clone()).unwrap().as_str(), long);
    }

    #[test]
    fn test_empty() {
        assert_eq!(UserName::new(""), Err(UserNameError::Empty));
    }

    #[test]
    fn test_serde_rejects_empty() {
        let name: UserName = serde_json::from_str("\"Demo User\"").unwrap();
        assert_eq!(name.as_str(), "Demo User");
        assert!(serde_json::from_str::<UserName>("\"\"").is_err());
    }
}
