//! Client errors

/// Alert text used when a failure carries no server message
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again later.";

/// Errors produced by API client operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The request never produced a response (connection, DNS, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    /// `msg` is the `msg` field of the error body, when there was one.
    #[error("server responded with status {status}")]
    Status { status: u16, msg: Option<String> },

    /// A success response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the response, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for authorization failures (401)
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// The server-supplied message, if the error body had one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { msg: Some(msg), .. } if !msg.trim().is_empty() => Some(msg),
            _ => None,
        }
    }

    /// Text to show the user: the server message, or a generic fallback
    pub fn user_message(&self) -> String {
        self.server_message()
            .unwrap_or(GENERIC_ERROR_MESSAGE)
            .to_string()
    }
}
