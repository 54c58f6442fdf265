//! Error taxonomy for calls to the duty API.

use thiserror::Error;

/// Suffix shown when a response body is not JSON.
const NON_JSON_HINT: &str =
    "The server might be returning an error page instead of a JSON response.";

/// Errors returned by API calls.
///
/// Authentication failures are not special-cased: a 401 surfaces as
/// [`ClientError::Server`] like any other rejected request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response was received.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status; `message` is the server's `detail` or the
    /// operation's fallback message.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The body could not be read as the expected JSON document.
    #[error("{0}")]
    MalformedResponse(String),

    /// The call needs a session and none is stored.
    #[error("No access token found. Please log in.")]
    MissingToken,

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
}

impl ClientError {
    /// Builds the error for a body that is not usable JSON.
    pub fn malformed(fallback: &str) -> Self {
        let fallback = fallback.trim_end();
        if fallback.ends_with('.') {
            ClientError::MalformedResponse(format!("{} {}", fallback, NON_JSON_HINT))
        } else {
            ClientError::MalformedResponse(format!("{}. {}", fallback, NON_JSON_HINT))
        }
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
