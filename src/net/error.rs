//! Failure taxonomy for calls into the authentication collaborator.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by auth requests and session resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The HTTP request could not be sent or completed.
    #[error("auth request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("auth request rejected: status {status}")]
    Status { status: u16 },

    /// The response body could not be deserialized.
    #[error("auth response parse failed: {0}")]
    Decode(String),

    /// Session resolution did not finish before its deadline.
    #[error("session resolution timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    /// Browser-only call attempted during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl AuthError {
    /// Message suitable for an auth form, hiding transport detail.
    pub fn form_message(&self) -> &'static str {
        match self {
            Self::Status { status: 401 | 403 } => "Invalid email or password.",
            Self::Status { status: 409 } => "An account with that email already exists.",
            Self::Status { status: 429 } => "Too many attempts. Try again shortly.",
            Self::Timeout { .. } | Self::Request(_) => "Could not reach the server.",
            Self::Status { .. } | Self::Decode(_) | Self::Unavailable => "Something went wrong. Please try again.",
        }
    }
}
