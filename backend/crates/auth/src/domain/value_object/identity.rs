//! Federated Identity Value Object
//!
//! Identifies a user at an external identity provider. The pair
//! `(provider, subject)` is the stable key for find-or-create: repeated
//! federated logins with the same pair must resolve to the same user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported identity providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown identity provider: {0}")]
pub struct UnknownProvider(String);

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
        }
    }
}

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Provider::Google),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable external identity: provider plus the provider's subject ID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FederatedIdentity {
    pub provider: Provider,
    /// Provider-assigned stable user identifier (Google's `sub`/`id`)
    pub subject: String,
}

impl FederatedIdentity {
    pub fn google(subject: impl Into<String>) -> Self {
        Self {
            provider: Provider::Google,
            subject: subject.into(),
        }
    }
}

impl fmt::Display for FederatedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider, self.subject)
    }
}
