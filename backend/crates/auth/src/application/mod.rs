//! Application Layer
//!
//! Use cases composing domain objects and repositories.

pub mod check_session;
pub mod config;
pub mod google;
pub mod register;
pub mod sign_in;
pub mod sign_out;
pub mod token;

pub use check_session::{CheckSessionUseCase, CurrentUser};
pub use config::AuthConfig;
pub use google::GoogleAuthUseCase;
pub use register::{RegisterInput, RegisterUseCase};
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_out::SignOutUseCase;
