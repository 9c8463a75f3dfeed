//! Secret Repository Trait

use crate::domain::entity::Secret;
use crate::error::SecretsResult;
use kernel::id::UserId;

/// Secret persistence operations
///
/// Append-only: there is no update or delete. `append` must be safe under
/// concurrency; N concurrent appends result in N stored secrets.
#[trait_variant::make(SecretRepository: Send)]
pub trait LocalSecretRepository {
    /// Persist a new secret
    async fn append(&self, secret: &Secret) -> SecretsResult<()>;

    /// All secrets across all users, oldest first
    async fn list_all(&self) -> SecretsResult<Vec<Secret>>;

    /// One user's secrets, oldest first
    async fn list_for_user(&self, user_id: UserId) -> SecretsResult<Vec<Secret>>;
}
