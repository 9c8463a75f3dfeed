//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong username or password. Reported uniformly so the response
    /// never reveals which part of the pair failed.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Registration collision on the username
    #[error("Username already exists")]
    DuplicateIdentity,

    /// Session token missing, malformed, expired, or revoked
    #[error("Session not found or expired")]
    SessionInvalid,

    /// OAuth callback state missing, already consumed, or expired
    #[error("Authorization state invalid or expired")]
    OAuthStateInvalid,

    /// Provider-side or network failure during the OAuth flow
    #[error("Identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Provider returned a profile we cannot use
    #[error("Malformed identity provider response: {0}")]
    InvalidProviderResponse(String),

    /// Input validation error (username or password policy)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::SessionInvalid
            | AuthError::OAuthStateInvalid => StatusCode::UNAUTHORIZED,
            AuthError::DuplicateIdentity => StatusCode::CONFLICT,
            AuthError::ProviderUnavailable(_) | AuthError::InvalidProviderResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::SessionInvalid
            | AuthError::OAuthStateInvalid => ErrorKind::Unauthorized,
            AuthError::DuplicateIdentity => ErrorKind::Conflict,
            AuthError::ProviderUnavailable(_) | AuthError::InvalidProviderResponse(_) => {
                ErrorKind::BadGateway
            }
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) => ErrorKind::ServiceUnavailable,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::ProviderUnavailable(msg) => {
                tracing::error!(message = %msg, "Identity provider unavailable");
            }
            AuthError::InvalidProviderResponse(msg) => {
                tracing::error!(message = %msg, "Malformed identity provider response");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::OAuthStateInvalid => {
                tracing::warn!("OAuth callback with invalid state");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
