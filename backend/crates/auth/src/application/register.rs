//! Register Use Case
//!
//! Creates a local account and signs the new user in.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::{Credential, Session, User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::UserName;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    /// Public ID of the new user
    pub public_id: String,
    /// Session token for the cookie; registration signs the user in
    pub session_token: String,
}

/// Register use case
pub struct RegisterUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> RegisterUseCase<U, S>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        // Early check for a friendlier error; the store's unique constraint
        // still backs this up under concurrent registration.
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::DuplicateIdentity);
        }

        // Argon2id is deliberately slow; keep it off the async workers
        let pepper = self.config.password_pepper.clone();
        let params = self.config.hash_params;
        let password_hash = tokio::task::spawn_blocking(move || {
            password.hash(pepper.as_deref(), params)
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new_local(user_name);
        let credential = Credential::new(user.user_id, password_hash);
        self.user_repo.create_local(&user, &credential).await?;

        let session = Session::new(
            user.user_id,
            user.public_id,
            self.config.session_ttl_chrono(),
        );
        self.session_repo.create(&session).await?;

        let session_token = token::issue(session.session_id, &self.config.session_secret);

        tracing::info!(
            public_id = %user.public_id,
            session_id = %session.session_id,
            "User registered"
        );

        Ok(RegisterOutput {
            public_id: user.public_id.to_string(),
            session_token,
        })
    }
}
