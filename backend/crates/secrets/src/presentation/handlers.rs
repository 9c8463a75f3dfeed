//! HTTP Handlers
//!
//! All routes here sit behind the auth gate; `CurrentUser` is guaranteed
//! present in request extensions by the time a handler runs.

use std::sync::Arc;

use auth::application::CurrentUser;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Extension, Form, Json};

use crate::application::{ListSecretsUseCase, SubmitSecretUseCase};
use crate::domain::repository::SecretRepository;
use crate::error::SecretsError;
use crate::presentation::dto::{SecretItem, SecretsListResponse, SubmitSecretForm};

/// Shared state for secrets handlers
#[derive(Clone)]
pub struct SecretsAppState<R>
where
    R: SecretRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /secrets
///
/// The shared listing: every user's secrets, oldest first.
pub async fn list_secrets<R>(
    State(state): State<SecretsAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
) -> Response
where
    R: SecretRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListSecretsUseCase::new(state.repo.clone());

    match use_case.execute().await {
        Ok(secrets) => {
            tracing::debug!(
                public_id = %current_user.public_id,
                count = secrets.len(),
                "Secrets listed"
            );
            let response = SecretsListResponse {
                secrets: secrets.into_iter().map(SecretItem::from).collect(),
            };
            Json(response).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// POST /submit
pub async fn submit_secret<R>(
    State(state): State<SecretsAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Form(form): Form<SubmitSecretForm>,
) -> Response
where
    R: SecretRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitSecretUseCase::new(state.repo.clone());

    match use_case.execute(current_user.user_id, &form.secret).await {
        Ok(_) => Redirect::to("/secrets").into_response(),
        Err(e @ SecretsError::Validation(_)) => {
            tracing::debug!(error = %e, "Secret rejected");
            Redirect::to("/submit").into_response()
        }
        Err(e) => e.into_response(),
    }
}
