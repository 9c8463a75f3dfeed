//! Secret Body Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum secret length in characters
pub const SECRET_BODY_MAX_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretBodyError {
    #[error("Secret cannot be empty")]
    Empty,

    #[error("Secret is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },
}

/// Validated secret text
///
/// Trimmed, non-empty, bounded length. Duplicates are allowed; two users
/// (or the same user twice) may submit identical text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretBody(String);

impl SecretBody {
    pub fn new(input: impl AsRef<str>) -> Result<Self, SecretBodyError> {
        let trimmed = input.as_ref().trim();

        if trimmed.is_empty() {
            return Err(SecretBodyError::Empty);
        }

        let length = trimmed.chars().count();
        if length > SECRET_BODY_MAX_LENGTH {
            return Err(SecretBodyError::TooLong {
                length,
                max: SECRET_BODY_MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reconstruct from stored value (assumes already validated)
    pub fn from_db(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SecretBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SecretBody {
    type Error = SecretBodyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SecretBody> for String {
    fn from(body: SecretBody) -> Self {
        body.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_body() {
        let body = SecretBody::new("  my secret  ").unwrap();
        assert_eq!(body.as_str(), "my secret");
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(SecretBody::new(""), Err(SecretBodyError::Empty)));
        assert!(matches!(
            SecretBody::new("   "),
            Err(SecretBodyError::Empty)
        ));
    }

    #[test]
    fn test_too_long_rejected() {
        let long = "a".repeat(SECRET_BODY_MAX_LENGTH + 1);
        assert!(matches!(
            SecretBody::new(long),
            Err(SecretBodyError::TooLong { .. })
        ));
        assert!(SecretBody::new("a".repeat(SECRET_BODY_MAX_LENGTH)).is_ok());
    }
}
