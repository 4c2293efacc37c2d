//! Client Module
//!
//! Talks to the board API over HTTP and keeps an optimistic board snapshot in
//! sync with drag-and-drop gestures.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs         - Module exports
//! ├── config.rs      - Server URL and API prefix
//! ├── error.rs       - ClientError
//! ├── api.rs         - BoardApi trait and the reqwest implementation
//! ├── optimistic.rs  - Gesture types and snapshot splicing
//! └── drag.rs        - DragController state machine
//! ```

pub mod api;
pub mod config;
pub mod drag;
pub mod error;
pub mod optimistic;

pub use api::{BoardApi, ClientResult, HttpBoardApi};
pub use config::Config;
pub use drag::{DragController, DragOutcome, Phase};
pub use error::ClientError;
pub use optimistic::{Container, DragGesture, DragKind, DropLocation, PendingMove};
