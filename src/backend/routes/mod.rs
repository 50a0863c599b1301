//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server: the
//! authentication endpoints, the three entity CRUD families, the count
//! endpoints consumed by the dashboard widgets, and the static file
//! fallback serving the front-end bundle.

/// Main router creation
pub mod router;

// Re-export commonly used functions
pub use router::create_router;
