//! Members Module
//!
//! Members are global rather than board-scoped.

pub mod db;
pub mod handlers;

pub use handlers::*;
