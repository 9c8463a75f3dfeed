//! In-Memory Secret Repository
//!
//! Used in tests and as a fallback when no database is configured.

use std::sync::{Arc, Mutex};

use kernel::id::UserId;

use crate::domain::entity::Secret;
use crate::domain::repository::SecretRepository;
use crate::error::SecretsResult;

/// In-memory secret store backed by an append-only vector
#[derive(Clone, Default)]
pub struct InMemorySecretRepository {
    inner: Arc<Mutex<Vec<Secret>>>,
}

impl InMemorySecretRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Secret>> {
        // A poisoned lock only means another test thread panicked mid-append
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SecretRepository for InMemorySecretRepository {
    async fn append(&self, secret: &Secret) -> SecretsResult<()> {
        self.lock().push(secret.clone());
        Ok(())
    }

    async fn list_all(&self) -> SecretsResult<Vec<Secret>> {
        Ok(self.lock().clone())
    }

    async fn list_for_user(&self, user_id: UserId) -> SecretsResult<Vec<Secret>> {
        Ok(self
            .lock()
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::SecretBody;

    #[tokio::test]
    async fn test_append_and_list_preserves_order() {
        let repo = InMemorySecretRepository::new();
        let user = UserId::new();

        for text in ["first", "second", "third"] {
            let secret = Secret::new(user, SecretBody::new(text).unwrap());
            repo.append(&secret).await.unwrap();
        }

        let all = repo.list_all().await.unwrap();
        let bodies: Vec<&str> = all.iter().map(|s| s.body.as_str()).collect();
        assert_eq!(bodies, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_list_for_user_filters() {
        let repo = InMemorySecretRepository::new();
        let alice = UserId::new();
        let bob = UserId::new();

        repo.append(&Secret::new(alice, SecretBody::new("a1").unwrap()))
            .await
            .unwrap();
        repo.append(&Secret::new(bob, SecretBody::new("b1").unwrap()))
            .await
            .unwrap();
        repo.append(&Secret::new(alice, SecretBody::new("a2").unwrap()))
            .await
            .unwrap();

        let alices = repo.list_for_user(alice).await.unwrap();
        assert_eq!(alices.len(), 2);
        assert!(alices.iter().all(|s| s.user_id == alice));

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_bodies_both_kept() {
        let repo = InMemorySecretRepository::new();
        let user = UserId::new();

        repo.append(&Secret::new(user, SecretBody::new("same").unwrap()))
            .await
            .unwrap();
        repo.append(&Secret::new(user, SecretBody::new("same").unwrap()))
            .await
            .unwrap();

        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }
}
