mod client;
mod error;
mod types;

pub use client::IdentityClient;
pub use error::IdentityError;
pub use types::{UserGroupMembership, identity_endpoint};
