//! Client error types

use thiserror::Error;
use uuid::Uuid;

use crate::shared::SharedError;

/// Errors surfaced by the HTTP client and the drag controller
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A drag-end arrived while a previous one was still being persisted
    #[error("a previous move is still being saved")]
    Busy,

    /// The gesture does not match the current snapshot
    #[error("invalid drag gesture: {0}")]
    InvalidGesture(String),

    /// The gesture names a list that is not on the board
    #[error("unknown container: {0}")]
    UnknownContainer(Uuid),

    /// Persisting failed and re-fetching the board failed too
    #[error("{source}; reloading the board also failed: {reload}")]
    Reload {
        source: Box<ClientError>,
        reload: Box<ClientError>,
    },
}

impl ClientError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

impl From<SharedError> for ClientError {
    fn from(err: SharedError) -> Self {
        ClientError::InvalidGesture(err.to_string())
    }
}
