//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the client and backend: the board entities, the request/response bodies of
//! the HTTP API, the ordering model used by drag-and-drop, and the
//! configuration and error types both sides build on.
//!
//! # Overview
//!
//! The shared module is platform-agnostic and always compiled. Backend-only
//! code lives in `backend` behind the `ssr` feature.

/// Board entities and the nested board aggregate
pub mod models;

/// Request and response bodies
pub mod requests;

/// Position invariants and splice helpers
pub mod ordering;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use models::{
    Board, BoardDetail, Card, CardDetail, CardLabel, CardLabelDetail, CardMember,
    CardMemberDetail, ChecklistItem, Label, List, ListDetail, Member,
};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use ordering::Ordered;
