//! Auth Gate Middleware
//!
//! Protects routes behind a valid session. The gate itself only decides;
//! navigation on denial is a redirect to the login entry point, matching
//! the browser-form flavor of the rest of the surface.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid session
///
/// On success the resolved [`CurrentUser`](crate::CurrentUser) is stored
/// in request extensions for downstream handlers.
pub async fn require_session<R>(
    state: AuthGateState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case =
        CheckSessionUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let current_user = match token {
        Some(token) => use_case.execute(&token).await.ok(),
        None => None,
    };

    match current_user {
        Some(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        None => Err(Redirect::to("/login").into_response()),
    }
}
