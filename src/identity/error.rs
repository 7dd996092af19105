use thiserror::Error;

/// Identity-service errors that can occur during lookups.
///
/// SECURITY: Error messages must NEVER contain the session token.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Authentication failed (invalid or expired session token)
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// Service returned an error response
    #[error("identity API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network-level error (connection failed, timeout, etc.)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// No user with the given OCID exists or it is not visible to the caller
    #[error("user not found: '{user}'")]
    UserNotFound { user: String },
}
