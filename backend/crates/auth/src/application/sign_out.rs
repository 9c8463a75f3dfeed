//! Sign Out Use Case
//!
//! Terminates a session. Idempotent: an unknown, expired, or malformed
//! token signs out successfully too, since the end state is the same.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        if let Some(session_id) = token::parse(session_token, &self.config.session_secret) {
            self.session_repo.delete(session_id).await?;
            tracing::info!(session_id = %session_id, "User signed out");
        }
        Ok(())
    }
}
