//! The shared error taxonomy.
//!
//! Every layer speaks this one enum. The gateway normalizes transport
//! and server failures into it; the session and booking layers decide
//! what each kind means for state (clear the credential? show the
//! message?); nothing above the gateway ever sees a raw HTTP status
//! outside of these variants.

/// A normalized failure from the remote API or the transport under it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: connection refused, DNS, timeout, or a
    /// response body that couldn't be decoded. No server verdict exists.
    #[error("network error: {0}")]
    Network(String),

    /// The login endpoint rejected the credentials. Carries the
    /// server's message verbatim for inline display.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// 401/403 on an authenticated call — the token is missing,
    /// expired, or lacks permission. The session layer reacts to this
    /// by clearing the credential.
    #[error("not authorized ({status}): {message}")]
    Authorization { status: u16, message: String },

    /// The registration email is already taken (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The server rejected the input as malformed (4xx on register).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Any other server-reported failure, with the status and message
    /// preserved for display.
    #[error("server error ({status}): {message}")]
    Remote { status: u16, message: String },
}

impl ApiError {
    /// The server's own message text, when one exists and is worth
    /// showing to the user. Transport failures have none — callers fall
    /// back to a generic message for those.
    pub fn server_message(&self) -> Option<&str> {
        let msg = match self {
            Self::Network(_) => return None,
            Self::Authentication(m)
            | Self::Conflict(m)
            | Self::Validation(m) => m,
            Self::Authorization { message, .. }
            | Self::Remote { message, .. } => message,
        };
        (!msg.is_empty()).then_some(msg.as_str())
    }

    /// Returns `true` if this failure means the stored credential is no
    /// longer good and must be cleared.
    pub fn invalidates_credential(&self) -> bool {
        matches!(self, Self::Authorization { .. })
    }
}
