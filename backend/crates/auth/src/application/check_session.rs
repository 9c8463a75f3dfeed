//! Check Session Use Case
//!
//! Resolves a cookie token back to an authenticated principal. This is
//! the auth gate's only dependency.

use std::sync::Arc;

use kernel::id::UserId;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::PublicId;
use crate::error::{AuthError, AuthResult};

/// Authenticated principal, stored in request extensions by the middleware
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub public_id: PublicId,
    pub session_id: Uuid,
    pub expires_at_ms: i64,
}

/// Check session use case
pub struct CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Resolve a token to the current user, touching the session
    ///
    /// The session row alone is not enough; the user it points at must
    /// still exist, otherwise the token is treated as invalid.
    pub async fn execute(&self, session_token: &str) -> AuthResult<CurrentUser> {
        let session_id = token::parse(session_token, &self.config.session_secret)
            .ok_or(AuthError::SessionInvalid)?;

        let mut session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        self.user_repo
            .find_by_id(&session.user_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        session.touch();
        self.session_repo.touch(&session).await?;

        Ok(CurrentUser {
            user_id: session.user_id,
            public_id: session.public_id,
            session_id: session.session_id,
            expires_at_ms: session.expires_at_ms,
        })
    }

    /// Convenience predicate for the gate
    pub async fn is_valid(&self, session_token: &str) -> bool {
        self.execute(session_token).await.is_ok()
    }
}
