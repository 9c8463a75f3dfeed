//! Presentation Layer
//!
//! HTTP handlers, request/response DTOs, router, and the auth gate
//! middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
