//! List Secrets Use Case

use std::sync::Arc;

use crate::domain::entity::Secret;
use crate::domain::repository::SecretRepository;
use crate::error::SecretsResult;
use kernel::id::UserId;

/// List secrets use case
///
/// The shared listing spans every user's secrets; authorship is not
/// exposed on the listing surface.
pub struct ListSecretsUseCase<R>
where
    R: SecretRepository,
{
    secret_repo: Arc<R>,
}

impl<R> ListSecretsUseCase<R>
where
    R: SecretRepository,
{
    pub fn new(secret_repo: Arc<R>) -> Self {
        Self { secret_repo }
    }

    /// All secrets across all users, oldest first
    pub async fn execute(&self) -> SecretsResult<Vec<Secret>> {
        self.secret_repo.list_all().await
    }

    /// The signed-in user's own secrets, oldest first
    pub async fn execute_for_user(&self, user_id: UserId) -> SecretsResult<Vec<Secret>> {
        self.secret_repo.list_for_user(user_id).await
    }
}
