//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Local registration and login with username + password
//! - Federated sign-in with Google (OAuth2 authorization code + PKCE)
//! - Server-side sessions with signed cookie tokens
//! - Auth gate middleware for protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (salted, tunable work factor)
//! - Session tokens carry an HMAC-SHA256 signature over the session ID
//! - Login failures are reported uniformly so the response never reveals
//!   whether the username or the password was wrong
//! - OAuth callbacks validated with single-use CSRF state + PKCE verifier

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::check_session::CurrentUser;
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
