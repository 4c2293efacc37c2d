//! Card Details Module

pub mod db;
pub mod handlers;

pub use handlers::*;
