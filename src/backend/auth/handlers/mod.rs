//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints:
//!
//! - **`login`** - POST /login - credential check, token mint, cookie set
//! - **`logout`** - GET /logout - cookie clear
//! - **`dashboard`** - GET /dashboard - gated reachability check

/// Request types
pub mod types;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Gated dashboard handler
pub mod dashboard;

// Re-export handlers
pub use dashboard::dashboard;
pub use login::login;
pub use logout::logout;
