//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `NotFound` / `MalformedId` - Missing board/list/card/item, or a non-UUID id (404)
//! - `SharedError` - Validation failures from the shared module (400)
//! - `UniqueViolation` / `ForeignKeyViolation` / `Database` - Persistence failures (500)
//! - `InvalidBody` / `InvalidPath` - Request could not be extracted (500)
//! - `HandlerError` - Explicit status set by a handler

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{BackendError, SERVER_ERROR_MESSAGE};

/// Result alias used by handlers and database functions
pub type BackendResult<T> = Result<T, BackendError>;
