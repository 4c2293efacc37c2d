//! Common test utilities and helpers
//!
//! - `server` builds an `axum-test` server over an in-memory database
//! - `fixtures` creates boards, lists and cards through the HTTP API
//! - `assertions` checks the JSON error body shared by every route

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod server;

pub use assertions::*;
pub use fixtures::*;
pub use server::*;
