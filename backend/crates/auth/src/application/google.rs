//! Google Sign-In Use Case
//!
//! Authorization code flow with PKCE:
//!
//! 1. `begin` builds the authorization URL with `openid email profile`
//!    scopes and persists the CSRF state + PKCE verifier (10-minute TTL).
//! 2. `callback` consumes the state atomically, exchanges the code for an
//!    access token, fetches the userinfo profile, then finds or creates
//!    the user keyed on `(provider, subject)` and starts a session.
//!
//! Repeated callbacks for the same external identity resolve to the same
//! user; no duplicate account is ever created.

use std::sync::Arc;

use oauth2::basic::BasicClient;
use oauth2::{
    AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, PkceCodeChallenge,
    PkceCodeVerifier, Scope, TokenResponse,
};
use serde::Deserialize;

use crate::application::config::{AuthConfig, GoogleConfig};
use crate::application::token;
use crate::domain::entity::{OAuthState, Session, User};
use crate::domain::repository::{OAuthStateRepository, SessionRepository, UserRepository};
use crate::domain::value_object::{Email, FederatedIdentity, Provider, UserName};
use crate::error::{AuthError, AuthResult};

const USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Attempts at finding a free username before giving up
const USER_NAME_ATTEMPTS: usize = 4;

/// Google userinfo API response
#[derive(Debug, Deserialize)]
struct GoogleProfile {
    id: String,
    email: Option<String>,
}

/// OAuth client type with auth URL and token URL set
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Google sign-in output
pub struct GoogleSignInOutput {
    pub public_id: String,
    pub session_token: String,
}

/// Google sign-in use case
pub struct GoogleAuthUseCase<U, S, O>
where
    U: UserRepository,
    S: SessionRepository,
    O: OAuthStateRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    state_repo: Arc<O>,
    config: Arc<AuthConfig>,
}

impl<U, S, O> GoogleAuthUseCase<U, S, O>
where
    U: UserRepository,
    S: SessionRepository,
    O: OAuthStateRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        session_repo: Arc<S>,
        state_repo: Arc<O>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            state_repo,
            config,
        }
    }

    fn google_config(&self) -> AuthResult<&GoogleConfig> {
        self.config
            .google
            .as_ref()
            .ok_or_else(|| AuthError::Internal("Google OAuth is not configured".to_string()))
    }

    fn create_client(&self, google: &GoogleConfig) -> ConfiguredClient {
        BasicClient::new(google.client_id.clone())
            .set_client_secret(google.client_secret.clone())
            .set_auth_uri(google.auth_url.clone())
            .set_token_uri(google.token_url.clone())
            .set_redirect_uri(google.redirect_url.clone())
    }

    /// Build the authorization URL and persist the pending state
    pub async fn begin(&self) -> AuthResult<String> {
        let google = self.google_config()?;
        let client = self.create_client(google);

        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (auth_url, csrf_state) = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .set_pkce_challenge(pkce_challenge)
            .url();

        let state = OAuthState::new(
            csrf_state.secret().clone(),
            Provider::Google,
            pkce_verifier.secret().clone(),
        );
        self.state_repo.put(&state).await?;

        tracing::debug!("Google authorization started");

        Ok(auth_url.to_string())
    }

    /// Handle the provider callback: validate state, exchange the code,
    /// fetch the profile, find or create the user, start a session
    pub async fn callback(&self, code: &str, state: &str) -> AuthResult<GoogleSignInOutput> {
        let pending = self
            .state_repo
            .take(state, Provider::Google)
            .await?
            .ok_or(AuthError::OAuthStateInvalid)?;

        let profile = self.fetch_profile(code, pending.pkce_verifier).await?;

        if profile.id.is_empty() {
            return Err(AuthError::InvalidProviderResponse(
                "Profile has no subject ID".to_string(),
            ));
        }

        let identity = FederatedIdentity::google(profile.id);
        let email = profile.email.and_then(|e| Email::new(e).ok());

        let user = self.find_or_create(identity, email).await?;

        let session = Session::new(
            user.user_id,
            user.public_id,
            self.config.session_ttl_chrono(),
        );
        self.session_repo.create(&session).await?;

        let session_token = token::issue(session.session_id, &self.config.session_secret);

        tracing::info!(
            public_id = %user.public_id,
            session_id = %session.session_id,
            "User signed in via Google"
        );

        Ok(GoogleSignInOutput {
            public_id: user.public_id.to_string(),
            session_token,
        })
    }

    /// Exchange the code with PKCE and fetch the userinfo profile
    async fn fetch_profile(
        &self,
        code: &str,
        pkce_verifier: String,
    ) -> AuthResult<GoogleProfile> {
        let google = self.google_config()?;
        let client = self.create_client(google);

        // Disable redirects on the token-exchange client (oauth2 crate
        // requirement against SSRF through the token endpoint)
        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let token_response = client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier))
            .request_async(&http_client)
            .await
            .map_err(|e| AuthError::ProviderUnavailable(format!("Token exchange failed: {}", e)))?;

        let access_token = token_response.access_token().secret();

        let response = reqwest::Client::new()
            .get(USERINFO_ENDPOINT)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::ProviderUnavailable(format!(
                "Userinfo endpoint returned {}",
                response.status()
            )));
        }

        response
            .json::<GoogleProfile>()
            .await
            .map_err(|e| AuthError::InvalidProviderResponse(e.to_string()))
    }

    /// Find the user for an external identity, creating it on first login
    pub(crate) async fn find_or_create(
        &self,
        identity: FederatedIdentity,
        email: Option<Email>,
    ) -> AuthResult<User> {
        if let Some(mut user) = self.user_repo.find_by_identity(&identity).await? {
            user.record_login();
            self.user_repo.record_login(&user).await?;
            return Ok(user);
        }

        for attempt in 0..USER_NAME_ATTEMPTS {
            let user_name = self.derive_user_name(email.as_ref(), &identity.subject, attempt)?;
            let user = User::new_federated(user_name, email.clone(), identity.clone());

            match self.user_repo.create_federated(&user).await {
                Ok(()) => {
                    tracing::info!(public_id = %user.public_id, "Federated user created");
                    return Ok(user);
                }
                Err(AuthError::DuplicateIdentity) => {
                    // Either a concurrent callback created this identity, or
                    // the derived username is taken. Re-check the identity,
                    // then retry with a different name.
                    if let Some(existing) = self.user_repo.find_by_identity(&identity).await? {
                        return Ok(existing);
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Err(AuthError::Internal(
            "Could not allocate a username for federated user".to_string(),
        ))
    }

    /// Derive a username from the profile email, falling back to the
    /// subject ID; later attempts append a random suffix
    fn derive_user_name(
        &self,
        email: Option<&Email>,
        subject: &str,
        attempt: usize,
    ) -> AuthResult<UserName> {
        let base = email
            .map(|e| sanitize_user_name_base(e.local_part()))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                let digits: String = subject.chars().filter(char::is_ascii_digit).take(8).collect();
                format!("user_{}", digits)
            });

        let candidate = if attempt == 0 {
            base
        } else {
            let bytes = platform::crypto::random_bytes(2);
            format!("{}{}", base, u16::from_be_bytes([bytes[0], bytes[1]]))
        };

        UserName::new(&candidate)
            .map_err(|e| AuthError::Internal(format!("Derived username invalid: {}", e)))
    }
}

/// Keep only username-legal characters and trim to a usable handle
fn sanitize_user_name_base(raw: &str) -> String {
    let filtered: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-'))
        .take(20)
        .collect();

    let trimmed = filtered.trim_matches(|c| matches!(c, '.' | '-')).to_string();
    if trimmed.chars().count() < 3 {
        String::new()
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_legal_handle() {
        assert_eq!(sanitize_user_name_base("Alice.Smith"), "alice.smith");
    }

    #[test]
    fn test_sanitize_strips_illegal_chars() {
        assert_eq!(sanitize_user_name_base("a!l@i#c$e"), "alice");
    }

    #[test]
    fn test_sanitize_trims_boundary_punctuation() {
        assert_eq!(sanitize_user_name_base(".alice."), "alice");
    }

    #[test]
    fn test_sanitize_rejects_too_short() {
        assert_eq!(sanitize_user_name_base("ab"), "");
        assert_eq!(sanitize_user_name_base("--"), "");
    }
}
