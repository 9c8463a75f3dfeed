//! Secrets Backend Module
//!
//! The protected resource: per-user append-only secret strings, with a
//! listing across all users. Gated by the auth session middleware.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Semantics
//! - Secrets are append-only within this surface; no update or delete
//! - Insertion order is preserved, duplicates permitted
//! - Concurrent appends for the same user all land (no lost updates)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{SecretsError, SecretsResult};
pub use infra::postgres::PgSecretRepository;
pub use presentation::router::secrets_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

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
