/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the board API. Every handler
 * returns `Result<_, BackendError>` and every database call converts its
 * `sqlx::Error` into this type with `?`.
 *
 * # Error Categories
 *
 * ## Validation Errors
 *
 * A request failed a presence check (blank board title). Mapped to 400.
 *
 * ## Not Found Errors
 *
 * A board, list, card, checklist item or association does not exist, or the
 * id in the path is not a UUID. Mapped to 404 with a message naming the
 * entity.
 *
 * ## Persistence Errors
 *
 * Constraint violations (duplicate association, dangling foreign key),
 * connection failures and any other database error. Mapped to 500 with a
 * generic message; the cause is logged server-side. A request body that does
 * not deserialize lands here too.
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::SharedError;

/// Generic body for every 5xx response
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use kanboard::backend::error::BackendError;
/// use uuid::Uuid;
///
/// let err = BackendError::not_found("Board", Uuid::nil());
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// The addressed entity does not exist
    #[error("{entity} not found")]
    NotFound {
        /// Entity kind, e.g. `"Board"`
        entity: &'static str,
        /// Identity that was looked up
        id: Uuid,
    },

    /// A path segment that should be an id is not a UUID
    #[error("{entity} not found")]
    MalformedId {
        /// Entity kind named by the route parameter
        entity: &'static str,
        /// Raw segment from the URI
        value: String,
    },

    /// Path parameters could not be extracted at all
    #[error("Invalid path parameters: {0}")]
    InvalidPath(#[source] PathRejection),

    /// Request body is not valid JSON for the route
    #[error("Invalid request body: {0}")]
    InvalidBody(#[source] JsonRejection),

    /// A composite-unique association already exists
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(#[source] sqlx::Error),

    /// A referenced parent row does not exist
    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(#[source] sqlx::Error),

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Shared error (validation, ordering, serialization)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Migration failure during startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a not-found error for an entity kind and identity
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `NotFound` / `MalformedId` - 404 Not Found
    /// - `SharedError::ValidationError` - 400 Bad Request
    /// - Everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } | Self::MalformedId { .. } => StatusCode::NOT_FOUND,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::SharedError(_)
            | Self::InvalidPath(_)
            | Self::InvalidBody(_)
            | Self::UniqueViolation(_)
            | Self::ForeignKeyViolation(_)
            | Self::Database(_)
            | Self::Migration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the caller
    ///
    /// Server errors never leak their cause.
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            return SERVER_ERROR_MESSAGE.to_string();
        }
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Whether this error came from a uniqueness constraint
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation(_))
    }

    /// Whether this error came from a dangling foreign key
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, Self::ForeignKeyViolation(_))
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::Database(db_err) => Some(db_err.kind()),
            _ => None,
        };
        match kind {
            Some(sqlx::error::ErrorKind::UniqueViolation) => Self::UniqueViolation(err),
            Some(sqlx::error::ErrorKind::ForeignKeyViolation) => Self::ForeignKeyViolation(err),
            _ => Self::Database(err),
        }
    }
}
