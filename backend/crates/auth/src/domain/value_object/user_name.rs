//! User Name Value Object
//!
//! The username is the public handle used for login and display.
//!
//! ## Invariants
//! - NFKC normalized, trimmed; canonical form is lowercase
//! - 3 to 30 characters after normalization
//! - ASCII only: a-z, 0-9, `_`, `.`, `-`
//! - Starts and ends with an alphanumeric or `_`
//! - No consecutive dots, at least one alphanumeric
//! - Not a reserved route word

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

/// Words that collide with routes or operational identities
const RESERVED_WORDS: &[&str] = &[
    "admin",
    "administrator",
    "root",
    "system",
    "support",
    "api",
    "auth",
    "login",
    "logout",
    "register",
    "signin",
    "signout",
    "signup",
    "secrets",
    "submit",
    "settings",
    "user",
    "users",
    "me",
    "anonymous",
    "guest",
    "null",
];

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username is too short ({length} chars, minimum {min})")]
    TooShort { length: usize, min: usize },

    #[error("Username is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[error("Invalid character '{char}' in username. Only a-z, 0-9, _, ., - are allowed")]
    InvalidCharacter { char: char },

    #[error("Username must start and end with a letter, digit, or _")]
    InvalidBoundary,

    #[error("Username cannot contain consecutive dots")]
    ConsecutiveDots,

    #[error("Username must contain at least one letter or digit")]
    NoAlphanumeric,

    #[error("'{word}' is a reserved username")]
    Reserved { word: String },
}

/// Validated, normalized user name
///
/// Stores the user's input (case preserved) alongside the lowercase
/// canonical form used for uniqueness checks.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    /// Create a new UserName from raw input
    ///
    /// Applies NFKC normalization and trimming, validates, and derives
    /// the canonical lowercase form.
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let original: String = input.as_ref().nfkc().collect::<String>().trim().to_string();
        let canonical = original.to_lowercase();
        Self::validate(&canonical)?;
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Get the original user name (preserves case)
    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get the canonical (lowercase) user name
    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Reconstruct from stored values (assumes already validated)
    pub fn from_db(original: &str) -> Self {
        Self {
            original: original.to_string(),
            canonical: original.to_lowercase(),
        }
    }

    fn validate(canonical: &str) -> Result<(), UserNameError> {
        if canonical.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = canonical.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort {
                length,
                min: USER_NAME_MIN_LENGTH,
            });
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if let Some(ch) = canonical.chars().find(|&c| !Self::is_valid_char(c)) {
            return Err(UserNameError::InvalidCharacter { char: ch });
        }

        // Length >= 3 guarantees first and last exist
        let first = canonical.chars().next().unwrap();
        let last = canonical.chars().next_back().unwrap();
        if !Self::is_valid_boundary_char(first) || !Self::is_valid_boundary_char(last) {
            return Err(UserNameError::InvalidBoundary);
        }

        if canonical.contains("..") {
            return Err(UserNameError::ConsecutiveDots);
        }

        if !canonical.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(UserNameError::NoAlphanumeric);
        }

        if RESERVED_WORDS.contains(&canonical) {
            return Err(UserNameError::Reserved {
                word: canonical.to_string(),
            });
        }

        Ok(())
    }

    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-')
    }

    #[inline]
    fn is_valid_boundary_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserName")
            .field("original", &self.original)
            .field("canonical", &self.canonical)
            .finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserName {
    type Error = UserNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_lowercase() {
        let name = UserName::new("  AlIcE_123  ").unwrap();
        assert_eq!(name.canonical(), "alice_123");
        assert_eq!(name.original(), "AlIcE_123");
    }

    #[test]
    fn test_nfkc_normalization() {
        // Full-width letters collapse to ASCII under NFKC
        let name = UserName::new("Ａlice").unwrap();
        assert_eq!(name.canonical(), "alice");
    }

    #[test]
    fn test_empty_fails() {
        assert!(matches!(UserName::new(""), Err(UserNameError::Empty)));
        assert!(matches!(UserName::new("   "), Err(UserNameError::Empty)));
    }

    #[test]
    fn test_length_bounds() {
        assert!(matches!(
            UserName::new("ab"),
            Err(UserNameError::TooShort { length: 2, min: 3 })
        ));
        assert!(UserName::new("abc").is_ok());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
        assert!(matches!(
            UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)),
            Err(UserNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_allowed_characters() {
        assert!(UserName::new("alice.bob-1_x").is_ok());
        assert!(matches!(
            UserName::new("alice@bob"),
            Err(UserNameError::InvalidCharacter { char: '@' })
        ));
        assert!(matches!(
            UserName::new("日本語"),
            Err(UserNameError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_boundary_characters() {
        assert!(UserName::new("_alice").is_ok());
        assert!(matches!(
            UserName::new(".alice"),
            Err(UserNameError::InvalidBoundary)
        ));
        assert!(matches!(
            UserName::new("alice-"),
            Err(UserNameError::InvalidBoundary)
        ));
    }

    #[test]
    fn test_consecutive_dots() {
        assert!(matches!(
            UserName::new("alice..bob"),
            Err(UserNameError::ConsecutiveDots)
        ));
        assert!(UserName::new("alice.bob").is_ok());
    }

    #[test]
    fn test_symbols_only_fails() {
        assert!(matches!(
            UserName::new("___"),
            Err(UserNameError::NoAlphanumeric)
        ));
    }

    #[test]
    fn test_reserved_words() {
        assert!(matches!(
            UserName::new("admin"),
            Err(UserNameError::Reserved { word }) if word == "admin"
        ));
        // Reserved check runs on the canonical form
        assert!(matches!(
            UserName::new("SECRETS"),
            Err(UserNameError::Reserved { .. })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let name = UserName::new("alice").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"alice\"");

        let parsed: UserName = serde_json::from_str("\"ALICE\"").unwrap();
        assert_eq!(parsed.canonical(), "alice");

        let invalid: Result<UserName, _> = serde_json::from_str("\"ab\"");
        assert!(invalid.is_err());
    }
}
