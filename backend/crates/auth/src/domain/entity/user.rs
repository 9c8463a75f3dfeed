//! User Entity
//!
//! Core user profile. Password material lives in the Credential entity;
//! a federated-only user has no Credential at all.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{Email, FederatedIdentity, PublicId, UserName};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Public-facing nanoid identifier (URL-safe)
    pub public_id: PublicId,
    /// User name (unique, for login and display)
    pub user_name: UserName,
    /// Email from the federated profile, if any
    pub email: Option<Email>,
    /// External identity for federated accounts; `None` for local accounts
    pub identity: Option<FederatedIdentity>,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new locally registered user
    pub fn new_local(user_name: UserName) -> Self {
        let now = Utc::now();
        Self {
            user_id: UserId::new(),
            public_id: PublicId::new(),
            user_name,
            email: None,
            identity: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new user from a federated profile
    pub fn new_federated(
        user_name: UserName,
        email: Option<Email>,
        identity: FederatedIdentity,
    ) -> Self {
        let now = Utc::now();
        Self {
            user_id: UserId::new(),
            public_id: PublicId::new(),
            user_name,
            email,
            identity: Some(identity),
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Whether this account was created via a federated provider
    pub fn is_federated(&self) -> bool {
        self.identity.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::Provider;

    #[test]
    fn test_new_local_user() {
        let user = User::new_local(UserName::new("alice").unwrap());
        assert!(!user.is_federated());
        assert!(user.last_login_at.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_new_federated_user() {
        let user = User::new_federated(
            UserName::new("alice").unwrap(),
            Some(Email::new("alice@example.com").unwrap()),
            FederatedIdentity::google("113290"),
        );
        assert!(user.is_federated());
        assert_eq!(user.identity.as_ref().unwrap().provider, Provider::Google);
    }

    #[test]
    fn test_record_login() {
        let mut user = User::new_local(UserName::new("alice").unwrap());
        user.record_login();
        assert!(user.last_login_at.is_some());
        assert!(user.updated_at >= user.created_at);
    }
}
