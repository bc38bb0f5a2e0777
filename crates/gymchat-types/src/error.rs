use thiserror::Error;

/// Failure of a request to the chat backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("HTTP {status}{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    #[error("server error: {0}")]
    Server(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Coarse classification used to word the notice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// The request never completed.
    Unreachable,
    /// The backend answered and reported an error.
    ServerReported,
    /// The backend answered with something unreadable.
    Malformed,
}

impl TransportError {
    pub fn category(&self) -> FailureCategory {
        match self {
            TransportError::Unreachable(_) => FailureCategory::Unreachable,
            TransportError::Status { .. } | TransportError::Server(_) => {
                FailureCategory::ServerReported
            }
            TransportError::Malformed(_) => FailureCategory::Malformed,
        }
    }

    /// The backend's own message, when it supplied one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TransportError::Server(message) => Some(message),
            TransportError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Errors from the durable key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(String),

    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),

    #[error("malformed stored data: {0}")]
    Malformed(String),
}

/// Errors returned by chat session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a message is already awaiting a reply")]
    Busy,
}
