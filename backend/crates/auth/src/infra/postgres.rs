//! PostgreSQL Repository Implementations

use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Credential, OAuthState, Session, User};
use crate::domain::repository::{
    CredentialRepository, OAuthStateRepository, SessionRepository, UserRepository,
};
use crate::domain::value_object::{Email, FederatedIdentity, Provider, PublicId, UserName};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-constraint violation to `DuplicateIdentity`
fn map_unique_violation(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return AuthError::DuplicateIdentity;
        }
    }
    AuthError::Database(err)
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create_local(&self, user: &User, credential: &Credential) -> AuthResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                public_id,
                user_name,
                user_name_canonical,
                email,
                provider,
                external_subject,
                last_login_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, NULL, NULL, $6, $7, $8)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.public_id.as_str())
        .bind(user.user_name.original())
        .bind(user.user_name.canonical())
        .bind(user.email.as_ref().map(|e| e.as_str()))
        .bind(user.last_login_at)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_unique_violation)?;

        sqlx::query(
            r#"
            INSERT INTO credentials (user_id, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(credential.user_id.as_uuid())
        .bind(credential.password_hash.as_phc_string())
        .bind(credential.created_at)
        .bind(credential.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn create_federated(&self, user: &User) -> AuthResult<()> {
        let identity = user
            .identity
            .as_ref()
            .ok_or_else(|| AuthError::Internal("Federated user without identity".to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                public_id,
                user_name,
                user_name_canonical,
                email,
                provider,
                external_subject,
                last_login_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.public_id.as_str())
        .bind(user.user_name.original())
        .bind(user.user_name.canonical())
        .bind(user.email.as_ref().map(|e| e.as_str()))
        .bind(identity.provider.as_str())
        .bind(&identity.subject)
        .bind(user.last_login_at)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id, public_id, user_name, user_name_canonical,
                email, provider, external_subject,
                last_login_at, created_at, updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id, public_id, user_name, user_name_canonical,
                email, provider, external_subject,
                last_login_at, created_at, updated_at
            FROM users
            WHERE user_name_canonical = $1
            "#,
        )
        .bind(user_name.canonical())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE user_name_canonical = $1)",
        )
        .bind(user_name.canonical())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_by_identity(&self, identity: &FederatedIdentity) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id, public_id, user_name, user_name_canonical,
                email, provider, external_subject,
                last_login_at, created_at, updated_at
            FROM users
            WHERE provider = $1 AND external_subject = $2
            "#,
        )
        .bind(identity.provider.as_str())
        .bind(&identity.subject)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn record_login(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                last_login_at = $2,
                updated_at = $3
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.last_login_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Credential Repository Implementation
// ============================================================================

impl CredentialRepository for PgAuthRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT user_id, password_hash, created_at, updated_at
            FROM credentials
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_credential()).transpose()
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                session_id,
                user_id,
                public_id,
                expires_at_ms,
                created_at,
                last_seen_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user_id.as_uuid())
        .bind(session.public_id.as_str())
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .bind(session.last_seen_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        let now_ms = Utc::now().timestamp_millis();

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT session_id, user_id, public_id, expires_at_ms, created_at, last_seen_at
            FROM sessions
            WHERE session_id = $1 AND expires_at_ms > $2
            "#,
        )
        .bind(session_id)
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_session()).transpose()
    }

    async fn touch(&self, session: &Session) -> AuthResult<()> {
        sqlx::query("UPDATE sessions SET last_seen_at = $2 WHERE session_id = $1")
            .bind(session.session_id)
            .bind(session.last_seen_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        // Stale OAuth states go with the same sweep
        sqlx::query("DELETE FROM oauth_states WHERE expires_at < NOW()")
            .execute(&self.pool)
            .await?;

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

// ============================================================================
// OAuth State Repository Implementation
// ============================================================================

impl OAuthStateRepository for PgAuthRepository {
    async fn put(&self, state: &OAuthState) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO oauth_states (state, provider, pkce_verifier, expires_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&state.state)
        .bind(state.provider.as_str())
        .bind(&state.pkce_verifier)
        .bind(state.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn take(&self, state: &str, provider: Provider) -> AuthResult<Option<OAuthState>> {
        // Single-use: DELETE ... RETURNING validates and consumes atomically
        let row = sqlx::query_as::<_, OAuthStateRow>(
            r#"
            DELETE FROM oauth_states
            WHERE state = $1 AND provider = $2 AND expires_at > NOW()
            RETURNING state, provider, pkce_verifier, expires_at
            "#,
        )
        .bind(state)
        .bind(provider.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_state()).transpose()
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    public_id: String,
    user_name: String,
    #[allow(dead_code)]
    user_name_canonical: String,
    email: Option<String>,
    provider: Option<String>,
    external_subject: Option<String>,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let public_id = PublicId::parse_str(&self.public_id)
            .map_err(|e| AuthError::Internal(format!("Invalid public_id: {}", e)))?;

        let identity = match (self.provider, self.external_subject) {
            (Some(provider), Some(subject)) => {
                let provider = Provider::from_str(&provider)
                    .map_err(|e| AuthError::Internal(e.to_string()))?;
                Some(FederatedIdentity { provider, subject })
            }
            (None, None) => None,
            _ => {
                return Err(AuthError::Internal(
                    "User row has provider without subject".to_string(),
                ));
            }
        };

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            public_id,
            user_name: UserName::from_db(&self.user_name),
            email: self.email.map(Email::from_db),
            identity,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    user_id: Uuid,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CredentialRow {
    fn into_credential(self) -> AuthResult<Credential> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid stored hash: {}", e)))?;

        Ok(Credential {
            user_id: UserId::from_uuid(self.user_id),
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    user_id: Uuid,
    public_id: String,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
    last_seen_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> AuthResult<Session> {
        let public_id = PublicId::parse_str(&self.public_id)
            .map_err(|e| AuthError::Internal(format!("Invalid public_id: {}", e)))?;

        Ok(Session {
            session_id: self.session_id,
            user_id: UserId::from_uuid(self.user_id),
            public_id,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
            last_seen_at: self.last_seen_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OAuthStateRow {
    state: String,
    provider: String,
    pkce_verifier: String,
    expires_at: DateTime<Utc>,
}

impl OAuthStateRow {
    fn into_state(self) -> AuthResult<OAuthState> {
        let provider =
            Provider::from_str(&self.provider).map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(OAuthState {
            state: self.state,
            provider,
            pkce_verifier: self.pkce_verifier,
            expires_at: self.expires_at,
        })
    }
}
