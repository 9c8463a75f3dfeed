//! OAuth State Entity
//!
//! Anti-forgery state for an in-flight authorization code flow. One row
//! per redirect to the provider; consumed exactly once by the callback.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::Provider;

/// Lifetime of a pending authorization (provider round trip budget)
pub const OAUTH_STATE_TTL_MINUTES: i64 = 10;

/// Pending OAuth authorization state
#[derive(Debug, Clone)]
pub struct OAuthState {
    /// CSRF state token, echoed back by the provider
    pub state: String,
    /// Which provider this flow targets
    pub provider: Provider,
    /// PKCE code verifier to present at token exchange
    pub pkce_verifier: String,
    /// Expiry; callbacks after this are rejected
    pub expires_at: DateTime<Utc>,
}

impl OAuthState {
    pub fn new(state: String, provider: Provider, pkce_verifier: String) -> Self {
        Self {
            state,
            provider,
            pkce_verifier,
            expires_at: Utc::now() + Duration::minutes(OAUTH_STATE_TTL_MINUTES),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_not_expired() {
        let state = OAuthState::new("abc".into(), Provider::Google, "verifier".into());
        assert!(!state.is_expired());
    }

    #[test]
    fn test_expired_state() {
        let mut state = OAuthState::new("abc".into(), Provider::Google, "verifier".into());
        state.expires_at = Utc::now() - Duration::seconds(1);
        assert!(state.is_expired());
    }
}
