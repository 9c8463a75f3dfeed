pub mod credential;
pub mod oauth_state;
pub mod session;
pub mod user;

pub use credential::Credential;
pub use oauth_state::OAuthState;
pub use session::Session;
pub use user::User;
