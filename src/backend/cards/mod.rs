//! Cards Module
//!
//! Create, update and delete cards. Moving a card between or within lists
//! lives in `backend::reorder`.

pub mod db;
pub mod handlers;

pub use handlers::*;
