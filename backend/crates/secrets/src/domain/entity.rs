//! Secret Entity

use crate::domain::value_object::SecretBody;
use chrono::{DateTime, Utc};
use kernel::id::{SecretId, UserId};

/// A single submitted secret
///
/// Secrets are immutable once created; the surface offers no update or
/// delete, only append and list.
#[derive(Debug, Clone)]
pub struct Secret {
    pub secret_id: SecretId,
    pub user_id: UserId,
    pub body: SecretBody,
    pub created_at: DateTime<Utc>,
}

impl Secret {
    pub fn new(user_id: UserId, body: SecretBody) -> Self {
        Self {
            secret_id: SecretId::new(),
            user_id,
            body,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_secret() {
        let user_id = UserId::new();
        let secret = Secret::new(user_id, SecretBody::new("hush").unwrap());
        assert_eq!(secret.user_id, user_id);
        assert_eq!(secret.body.as_str(), "hush");
    }
}
