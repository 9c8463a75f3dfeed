//! HTTP Handlers
//!
//! Browser-form flavored: success and expected failures answer with a
//! 303 redirect, store failures surface as error responses.

use std::sync::Arc;

use axum::Form;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Redirect, Response};

use crate::application::config::AuthConfig;
use crate::application::{
    GoogleAuthUseCase, RegisterInput, RegisterUseCase, SignInInput, SignInUseCase, SignOutUseCase,
};
use crate::domain::repository::{
    CredentialRepository, OAuthStateRepository, SessionRepository, UserRepository,
};
use crate::error::AuthError;
use crate::presentation::dto::{GoogleCallbackQuery, LoginForm, RegisterForm};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository
        + CredentialRepository
        + SessionRepository
        + OAuthStateRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<RegisterForm>,
) -> Response
where
    R: UserRepository
        + CredentialRepository
        + SessionRepository
        + OAuthStateRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case =
        RegisterUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        user_name: form.username,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => signed_in_redirect(&state.config, &output.session_token),
        Err(e @ (AuthError::DuplicateIdentity | AuthError::Validation(_))) => {
            tracing::debug!(error = %e, "Registration rejected");
            Redirect::to("/register").into_response()
        }
        Err(e) => e.into_response(),
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> Response
where
    R: UserRepository
        + CredentialRepository
        + SessionRepository
        + OAuthStateRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        user_name: form.username,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => signed_in_redirect(&state.config, &output.session_token),
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Invalid login attempt");
            Redirect::to("/login").into_response()
        }
        Err(e) => e.into_response(),
    }
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
pub async fn logout<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: UserRepository
        + CredentialRepository
        + SessionRepository
        + OAuthStateRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    if let Some(token) =
        platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name)
    {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        // The cookie gets cleared either way
        if let Err(e) = use_case.execute(&token).await {
            tracing::error!(error = %e, "Sign out failed");
        }
    }

    let cookie = state.config.cookie_config().build_delete_cookie();
    with_cookie(Redirect::to("/").into_response(), &cookie)
}

// ============================================================================
// Google OAuth
// ============================================================================

/// GET /auth/google
pub async fn google_start<R>(State(state): State<AuthAppState<R>>) -> Response
where
    R: UserRepository
        + CredentialRepository
        + SessionRepository
        + OAuthStateRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = GoogleAuthUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    match use_case.begin().await {
        Ok(auth_url) => Redirect::to(&auth_url).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /auth/google/secrets (provider callback)
pub async fn google_callback<R>(
    State(state): State<AuthAppState<R>>,
    Query(query): Query<GoogleCallbackQuery>,
) -> Response
where
    R: UserRepository
        + CredentialRepository
        + SessionRepository
        + OAuthStateRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let (Some(code), Some(state_param)) = (query.code, query.state) else {
        // Consent denied or malformed callback
        tracing::warn!(error = ?query.error, "Google callback without code/state");
        return Redirect::to("/login").into_response();
    };

    let use_case = GoogleAuthUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    match use_case.callback(&code, &state_param).await {
        Ok(output) => signed_in_redirect(&state.config, &output.session_token),
        Err(
            e @ (AuthError::OAuthStateInvalid
            | AuthError::ProviderUnavailable(_)
            | AuthError::InvalidProviderResponse(_)),
        ) => {
            tracing::warn!(error = %e, "Google sign-in failed");
            Redirect::to("/login").into_response()
        }
        Err(e) => e.into_response(),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// 303 to /secrets carrying the freshly issued session cookie
fn signed_in_redirect(config: &AuthConfig, session_token: &str) -> Response {
    let cookie = config.cookie_config().build_set_cookie(session_token);
    with_cookie(Redirect::to("/secrets").into_response(), &cookie)
}

fn with_cookie(mut response: Response, cookie: &str) -> Response {
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
            response
        }
        Err(e) => AuthError::Internal(format!("Invalid cookie header: {}", e)).into_response(),
    }
}
