//! Request DTOs
//!
//! Browser-facing form and query payloads.

use serde::Deserialize;

/// POST /register form body
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
}

/// POST /login form body
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// GET /auth/google/secrets callback query
///
/// `code` and `state` are absent when the user denied consent; Google
/// sends `error` instead.
#[derive(Debug, Deserialize)]
pub struct GoogleCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}
