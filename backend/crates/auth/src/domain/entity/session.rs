//! Session Entity
//!
//! Server-side session record. The browser holds only the signed token;
//! everything else lives here.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use uuid::Uuid;

use crate::domain::value_object::PublicId;

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4), the signed portion of the cookie token
    pub session_id: Uuid,
    /// Reference to User
    pub user_id: UserId,
    /// Public ID, denormalized for logging without a user lookup
    pub public_id: PublicId,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last request timestamp
    pub last_seen_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session
    ///
    /// TTL comes from application config, not hard-coded here.
    pub fn new(user_id: UserId, public_id: PublicId, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            session_id: Uuid::new_v4(),
            user_id,
            public_id,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_seen_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Update last seen timestamp
    pub fn touch(&mut self) {
        self.last_seen_at = Utc::now();
    }
}
