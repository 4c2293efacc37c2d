//! Reorder Service
//!
//! Persists drag-and-drop results for lists and cards.

pub mod db;
pub mod handlers;

pub use handlers::*;
