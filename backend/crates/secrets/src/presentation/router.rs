//! Secrets Router
//!
//! Routes are unguarded here; the composition root wraps this router
//! with the auth gate middleware.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::SecretRepository;
use crate::infra::postgres::PgSecretRepository;
use crate::presentation::handlers::{self, SecretsAppState};

/// Create the Secrets router with PostgreSQL repository
pub fn secrets_router(repo: PgSecretRepository) -> Router {
    secrets_router_generic(repo)
}

/// Create a generic Secrets router for any repository implementation
pub fn secrets_router_generic<R>(repo: R) -> Router
where
    R: SecretRepository + Clone + Send + Sync + 'static,
{
    let state = SecretsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/secrets", get(handlers::list_secrets::<R>))
        .route("/submit", post(handlers::submit_secret::<R>))
        .with_state(state)
}
