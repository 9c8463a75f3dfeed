//! Domain Layer
//!
//! Entities, value objects, and repository traits. No framework or
//! persistence concerns.

pub mod entity;
pub mod repository;
pub mod value_object;
