pub mod email;
pub mod identity;
pub mod public_id;
pub mod user_name;

pub use email::Email;
pub use identity::{FederatedIdentity, Provider};
pub use public_id::PublicId;
pub use user_name::UserName;
