//! Routes Module
//!
//! HTTP route configuration and router assembly.

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
