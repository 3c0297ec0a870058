//! Client error types

use thiserror::Error;

/// Last-resort message when neither the server nor the error itself says
/// anything useful.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response was received (connection refused, DNS, TLS, ...)
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The fixed request timeout elapsed
    #[error("request timed out")]
    Timeout,

    /// The server answered 401; the stored token has been cleared
    #[error("authentication required")]
    Unauthorized { message: Option<String> },

    /// Any other non-2xx answer
    #[error("request failed with status code {status}")]
    Status { status: u16, message: Option<String> },

    /// The request could not be built or the response could not be used
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Client construction failed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Transport(err)
        }
    }
}

impl ClientError {
    /// The `message` field of the server's error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Unauthorized { message } | ClientError::Status { message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized { .. } => Some(401),
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The error's own description, without the server body.
    fn description(&self) -> String {
        match self {
            ClientError::InvalidResponse(detail) | ClientError::Config(detail) => {
                detail.trim().to_string()
            }
            other => other.to_string(),
        }
    }

    /// Best-available human-readable message.
    ///
    /// Server message, then the error's own description, then
    /// [`GENERIC_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        let own = self.description();
        if own.is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            own
        }
    }

    /// Whether the server reported the resource as absent.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
            || self
                .server_message()
                .is_some_and(|m| m.to_lowercase().contains("not found"))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }
}
