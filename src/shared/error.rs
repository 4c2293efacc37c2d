//! Shared Error Types
//!
//! This module defines error types that are shared between the client and backend.
//! These errors represent failure cases that can be detected without touching
//! the database or the network.
//!
//! # Error Categories
//!
//! - `ValidationError` - Request data failed a presence check
//! - `OrderingError` - A splice referenced an index outside its container
//! - `SerializationError` - JSON serialization/deserialization failures
//!
//! # Usage
//!
//! ```rust
//! use kanboard::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Board title is required");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Index outside the bounds of an ordered container
    #[error("Index {index} out of range for container of length {len}")]
    OrderingError {
        /// Requested index
        index: usize,
        /// Length of the container at the time of the splice
        len: usize,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new out-of-range error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OrderingError { index, len }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
