//! Submit Secret Use Case
//!
//! Appends one secret for the signed-in user. Each submission creates a
//! new row; submitting the same text twice yields two secrets.

use std::sync::Arc;

use crate::domain::entity::Secret;
use crate::domain::repository::SecretRepository;
use crate::domain::value_object::SecretBody;
use crate::error::{SecretsError, SecretsResult};
use kernel::id::UserId;

/// Submit secret use case
pub struct SubmitSecretUseCase<R>
where
    R: SecretRepository,
{
    secret_repo: Arc<R>,
}

impl<R> SubmitSecretUseCase<R>
where
    R: SecretRepository,
{
    pub fn new(secret_repo: Arc<R>) -> Self {
        Self { secret_repo }
    }

    pub async fn execute(&self, user_id: UserId, body: &str) -> SecretsResult<Secret> {
        let body = SecretBody::new(body).map_err(|e| SecretsError::Validation(e.to_string()))?;

        let secret = Secret::new(user_id, body);
        self.secret_repo.append(&secret).await?;

        tracing::info!(
            secret_id = %secret.secret_id,
            user_id = %user_id,
            "Secret submitted"
        );

        Ok(secret)
    }
}
