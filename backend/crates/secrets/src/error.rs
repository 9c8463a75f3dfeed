//! Secrets Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Secrets-specific result type alias
pub type SecretsResult<T> = Result<T, SecretsError>;

/// Secrets-specific error variants
#[derive(Debug, Error)]
pub enum SecretsError {
    /// Submitted secret violates the body policy
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SecretsError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SecretsError::Validation(_) => StatusCode::BAD_REQUEST,
            SecretsError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            SecretsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SecretsError::Validation(_) => ErrorKind::BadRequest,
            SecretsError::Database(_) => ErrorKind::ServiceUnavailable,
            SecretsError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            SecretsError::Database(e) => {
                tracing::error!(error = %e, "Secrets database error");
            }
            SecretsError::Internal(msg) => {
                tracing::error!(message = %msg, "Secrets internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Secrets error");
            }
        }
    }
}

impl IntoResponse for SecretsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            SecretsError::Validation("empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SecretsError::Internal("oops".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
