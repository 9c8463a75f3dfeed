//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Password hashing (Argon2id, tunable work factor)
//! - Cookie construction and extraction
//! - Small cryptographic helpers (random bytes, HMAC, Base64)

pub mod cookie;
pub mod crypto;
pub mod password;
