//! Boards Module
//!
//! Board CRUD and the board aggregate loader.

pub mod aggregate;
pub mod db;
pub mod handlers;

pub use aggregate::load_board;
pub use handlers::*;
