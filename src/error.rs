use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::identity::IdentityError;

// BSD sysexits(3) codes.
pub const EX_USAGE: u8 = 64;
pub const EX_DATAERR: u8 = 65;
pub const EX_NOINPUT: u8 = 66;
pub const EX_UNAVAILABLE: u8 = 69;
pub const EX_CONFIG: u8 = 78;

#[derive(Debug, Error)]
pub enum TioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("failed to read {}: {source}", .path.display())]
    ReadList {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("identifier line with no preceding resource line: {ocid}")]
    DanglingIdentifier { ocid: String },

    #[error("no group memberships returned for user: {user}")]
    NoMemberships { user: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TioError {
    /// Exit status reported to the shell; one deliberate code per error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            TioError::Config(_) => EX_CONFIG,
            TioError::Identity(_) => EX_UNAVAILABLE,
            TioError::ReadList { .. } | TioError::Io(_) => EX_NOINPUT,
            TioError::DanglingIdentifier { .. } | TioError::NoMemberships { .. } => EX_DATAERR,
        }
    }
}
