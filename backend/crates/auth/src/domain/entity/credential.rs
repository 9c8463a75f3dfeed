//! Credential Entity
//!
//! Password verifier for a locally registered user. Kept separate from
//! the User entity so profile reads never touch password material.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

/// Password credential entity
#[derive(Debug, Clone)]
pub struct Credential {
    /// Owning user
    pub user_id: UserId,
    /// Argon2id verifier in PHC string format
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(user_id: UserId, password_hash: HashedPassword) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
