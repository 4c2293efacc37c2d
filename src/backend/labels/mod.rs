//! Labels Module
//!
//! Labels belong to a board and are linked to cards through
//! `backend::card_details`.

pub mod db;
pub mod handlers;

pub use handlers::*;
