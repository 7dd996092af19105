//! tio - Terraform Imports for OCI
//!
//! Reads a resource/ocid list and prints one Terraform import block per
//! resolved identifier, using the tenancy's identity service to map each
//! user OCID to its first group membership.

pub mod config;
pub mod error;
pub mod generate;
pub mod identity;
pub mod import;

pub use config::{ConfigError, OciConfig};
pub use error::TioError;
pub use generate::{generate, is_identifier_line, read_lines};
pub use identity::{IdentityClient, IdentityError, UserGroupMembership};
pub use import::ImportBlock;
