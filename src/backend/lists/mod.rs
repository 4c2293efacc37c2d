//! Lists Module
//!
//! Create, rename and delete lists. Reordering lives in `backend::reorder`.

pub mod db;
pub mod handlers;

pub use handlers::*;
