//! Backend Module
//!
//! This module contains all server-side code for the kanban board: an Axum
//! HTTP server exposing board CRUD and drag-and-drop reorder endpoints on top
//! of a SQLite store.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`database`** - The `Database` handle injected into every handler
//! - **`boards`** - Boards and the board aggregate loader
//! - **`labels`** - Board labels
//! - **`lists`** / **`cards`** - List and card CRUD
//! - **`reorder`** - Persisting drag-and-drop moves
//! - **`card_details`** - Card labels, members and checklist items
//! - **`members`** - Global member directory
//! - **`seed`** - Demo data for empty databases
//! - **`error`** - Backend error types and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── database/       - Connection pool and migrations
//! ├── boards/         - Board handlers, queries, aggregate loader
//! ├── labels/         - Label handlers and queries
//! ├── lists/          - List handlers and queries
//! ├── cards/          - Card handlers and queries
//! ├── reorder/        - Move handlers and queries
//! ├── card_details/   - Label/member links and checklist items
//! ├── members/        - Member handlers and queries
//! ├── seed.rs         - Demo data
//! └── error/          - Error types
//! ```
//!
//! # Concurrency
//!
//! Requests are handled independently; the connection pool inside
//! `Database` is the only shared resource. Concurrent moves of siblings
//! resolve as last write wins on `order`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Persistence client
pub mod database;

/// Backend error types
pub mod error;

/// Path and JSON extractors rejecting with `BackendError`
pub mod extract;

/// Boards and the board aggregate
pub mod boards;

/// Board labels
pub mod labels;

/// Lists
pub mod lists;

/// Cards
pub mod cards;

/// Drag-and-drop persistence
pub mod reorder;

/// Card labels, members and checklist items
pub mod card_details;

/// Member directory
pub mod members;

/// Demo data
pub mod seed;

pub use database::Database;
pub use error::{BackendError, BackendResult};
pub use server::{create_app, create_app_with_database, AppState, ServerConfig};
