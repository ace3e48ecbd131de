//! Transient user-facing messages.

use slotbook_types::ApiError;

/// The inline message a screen shows after a mutation.
///
/// Containers hold at most ONE of these (`Option<Notice>`), which is
/// what makes success and error mutually exclusive — there is no second
/// slot for a stale message to survive in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    /// Builds the error notice for a failed operation: the server's own
    /// message when it sent one, otherwise the given fallback.
    pub fn from_failure(err: &ApiError, fallback: &str) -> Self {
        Self::Error(err.server_message().unwrap_or(fallback).to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
