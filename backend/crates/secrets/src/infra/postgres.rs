//! PostgreSQL Secret Repository

use chrono::{DateTime, Utc};
use kernel::id::{SecretId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::Secret;
use crate::domain::repository::SecretRepository;
use crate::domain::value_object::SecretBody;
use crate::error::SecretsResult;

/// PostgreSQL-backed secret repository
#[derive(Clone)]
pub struct PgSecretRepository {
    pool: PgPool,
}

impl PgSecretRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SecretRepository for PgSecretRepository {
    async fn append(&self, secret: &Secret) -> SecretsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO secrets (secret_id, user_id, body, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(secret.secret_id.as_uuid())
        .bind(secret.user_id.as_uuid())
        .bind(secret.body.as_str())
        .bind(secret.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> SecretsResult<Vec<Secret>> {
        let rows = sqlx::query_as::<_, SecretRow>(
            r#"
            SELECT secret_id, user_id, body, created_at
            FROM secrets
            ORDER BY created_at ASC, secret_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SecretRow::into_secret).collect())
    }

    async fn list_for_user(&self, user_id: UserId) -> SecretsResult<Vec<Secret>> {
        let rows = sqlx::query_as::<_, SecretRow>(
            r#"
            SELECT secret_id, user_id, body, created_at
            FROM secrets
            WHERE user_id = $1
            ORDER BY created_at ASC, secret_id ASC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SecretRow::into_secret).collect())
    }
}

#[derive(sqlx::FromRow)]
struct SecretRow {
    secret_id: Uuid,
    user_id: Uuid,
    body: String,
    created_at: DateTime<Utc>,
}

impl SecretRow {
    fn into_secret(self) -> Secret {
        Secret {
            secret_id: SecretId::from_uuid(self.secret_id),
            user_id: UserId::from_uuid(self.user_id),
            body: SecretBody::from_db(self.body),
            created_at: self.created_at,
        }
    }
}
