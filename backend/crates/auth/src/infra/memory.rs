//! In-Memory Repository Implementation
//!
//! Backs tests and local experiments. Mirrors the PostgreSQL semantics:
//! canonical-username uniqueness, single-use OAuth states, expired
//! sessions invisible to lookups.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use kernel::id::UserId;
use uuid::Uuid;

use crate::domain::entity::{Credential, OAuthState, Session, User};
use crate::domain::repository::{
    CredentialRepository, OAuthStateRepository, SessionRepository, UserRepository,
};
use crate::domain::value_object::{FederatedIdentity, Provider, UserName};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    credentials: HashMap<Uuid, Credential>,
    sessions: HashMap<Uuid, Session>,
    oauth_states: HashMap<String, OAuthState>,
}

/// In-memory auth repository
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn insert_user(inner: &mut Inner, user: &User) -> AuthResult<()> {
        let name_taken = inner
            .users
            .values()
            .any(|u| u.user_name.canonical() == user.user_name.canonical());
        let identity_taken = user
            .identity
            .as_ref()
            .is_some_and(|id| inner.users.values().any(|u| u.identity.as_ref() == Some(id)));

        if name_taken || identity_taken {
            return Err(AuthError::DuplicateIdentity);
        }

        inner.users.insert(*user.user_id.as_uuid(), user.clone());
        Ok(())
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create_local(&self, user: &User, credential: &Credential) -> AuthResult<()> {
        let mut inner = self.lock();
        Self::insert_user(&mut inner, user)?;
        inner
            .credentials
            .insert(*credential.user_id.as_uuid(), credential.clone());
        Ok(())
    }

    async fn create_federated(&self, user: &User) -> AuthResult<()> {
        let mut inner = self.lock();
        Self::insert_user(&mut inner, user)
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.lock().users.get(user_id.as_uuid()).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .values()
            .find(|u| u.user_name.canonical() == user_name.canonical())
            .cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        Ok(self
            .lock()
            .users
            .values()
            .any(|u| u.user_name.canonical() == user_name.canonical()))
    }

    async fn find_by_identity(&self, identity: &FederatedIdentity) -> AuthResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .values()
            .find(|u| u.identity.as_ref() == Some(identity))
            .cloned())
    }

    async fn record_login(&self, user: &User) -> AuthResult<()> {
        let mut inner = self.lock();
        if let Some(stored) = inner.users.get_mut(user.user_id.as_uuid()) {
            stored.last_login_at = user.last_login_at;
            stored.updated_at = user.updated_at;
        }
        Ok(())
    }
}

impl CredentialRepository for InMemoryAuthRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        Ok(self.lock().credentials.get(user_id.as_uuid()).cloned())
    }
}

impl SessionRepository for InMemoryAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        self.lock()
            .sessions
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        Ok(self
            .lock()
            .sessions
            .get(&session_id)
            .filter(|s| !s.is_expired())
            .cloned())
    }

    async fn touch(&self, session: &Session) -> AuthResult<()> {
        if let Some(stored) = self.lock().sessions.get_mut(&session.session_id) {
            stored.last_seen_at = session.last_seen_at;
        }
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.lock().sessions.remove(&session_id);
        Ok(())
    }

    async fn delete_expired(&self) -> AuthResult<u64> {
        let mut inner = self.lock();
        let before = inner.sessions.len();
        inner.sessions.retain(|_, s| !s.is_expired());
        inner.oauth_states.retain(|_, s| !s.is_expired());
        Ok((before - inner.sessions.len()) as u64)
    }
}

impl OAuthStateRepository for InMemoryAuthRepository {
    async fn put(&self, state: &OAuthState) -> AuthResult<()> {
        self.lock()
            .oauth_states
            .insert(state.state.clone(), state.clone());
        Ok(())
    }

    async fn take(&self, state: &str, provider: Provider) -> AuthResult<Option<OAuthState>> {
        let mut inner = self.lock();
        let Some(found) = inner.oauth_states.remove(state) else {
            return Ok(None);
        };
        if found.provider != provider || found.expires_at < Utc::now() {
            return Ok(None);
        }
        Ok(Some(found))
    }
}
