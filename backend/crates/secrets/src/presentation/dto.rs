//! Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::Secret;

/// POST /submit form body
#[derive(Debug, Deserialize)]
pub struct SubmitSecretForm {
    pub secret: String,
}

/// One entry in the shared listing
///
/// Authorship is deliberately absent; the listing is anonymous.
#[derive(Debug, Serialize)]
pub struct SecretItem {
    pub secret: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<Secret> for SecretItem {
    fn from(secret: Secret) -> Self {
        Self {
            secret: secret.body.into(),
            submitted_at: secret.created_at,
        }
    }
}

/// GET /secrets response body
#[derive(Debug, Serialize)]
pub struct SecretsListResponse {
    pub secrets: Vec<SecretItem>,
}
