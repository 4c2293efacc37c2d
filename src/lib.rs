//! Kanban board backend and drag-and-drop client.
//!
//! - [`shared`] holds the entities, request bodies and ordering model used on
//!   both sides of the wire.
//! - [`backend`] (feature `ssr`) is the Axum server over SQLite.
//! - [`client`] talks to the server and keeps an optimistic board snapshot
//!   in sync with drag gestures.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// HTTP client and drag controller
pub mod client;
