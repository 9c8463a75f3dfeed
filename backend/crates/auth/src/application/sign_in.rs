//! Sign In Use Case
//!
//! Verifies a username/password pair and creates a session. Every failure
//! on the credential path maps to the same `InvalidCredentials` error so
//! the response never reveals whether the username exists.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::Session;
use crate::domain::repository::{CredentialRepository, SessionRepository, UserRepository};
use crate::domain::value_object::UserName;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub public_id: String,
    pub session_token: String,
}

/// Sign in use case
pub struct SignInUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, C, S> SignInUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: SessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        credential_repo: Arc<C>,
        session_repo: Arc<S>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            credential_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let user_name =
            UserName::new(&input.user_name).map_err(|_| AuthError::InvalidCredentials)?;
        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let mut user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Federated-only accounts have no credential and cannot password-login
        let credential = self
            .credential_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let pepper = self.config.password_pepper.clone();
        let hash = credential.password_hash.clone();
        let password_valid =
            tokio::task::spawn_blocking(move || hash.verify(&password, pepper.as_deref()))
                .await
                .map_err(|e| AuthError::Internal(format!("Verification task failed: {}", e)))?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        user.record_login();
        self.user_repo.record_login(&user).await?;

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
            "User signed in"
        );

        Ok(SignInOutput {
            public_id: user.public_id.to_string(),
            session_token,
        })
    }
}
