//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer.

use kernel::id::UserId;
use uuid::Uuid;

use crate::domain::entity::{Credential, OAuthState, Session, User};
use crate::domain::value_object::{FederatedIdentity, Provider, UserName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a local user together with its credential, atomically.
    /// Returns `DuplicateIdentity` when the username is taken.
    async fn create_local(&self, user: &User, credential: &Credential) -> AuthResult<()>;

    /// Create a federated user (no credential).
    /// Returns `DuplicateIdentity` when the username is taken.
    async fn create_federated(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by user name (canonical form)
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;

    /// Find user by external identity (provider + subject)
    async fn find_by_identity(&self, identity: &FederatedIdentity) -> AuthResult<Option<User>>;

    /// Persist a successful login timestamp
    async fn record_login(&self, user: &User) -> AuthResult<()>;
}

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find credential by user ID; federated-only users have none
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find a live session by ID; expired sessions are not returned
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Update last seen timestamp
    async fn touch(&self, session: &Session) -> AuthResult<()>;

    /// Delete a session; idempotent, deleting twice is a no-op
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Remove expired sessions, returning how many were deleted
    async fn delete_expired(&self) -> AuthResult<u64>;
}

/// OAuth state repository trait
#[trait_variant::make(OAuthStateRepository: Send)]
pub trait LocalOAuthStateRepository {
    /// Store a pending authorization state
    async fn put(&self, state: &OAuthState) -> AuthResult<()>;

    /// Atomically consume a pending state. Returns `None` when the state
    /// is unknown, expired, or was already consumed.
    async fn take(&self, state: &str, provider: Provider) -> AuthResult<Option<OAuthState>>;
}
