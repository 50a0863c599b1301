//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server.
//!
//! - **`auth`** - The session gate protecting routes that require a
//!   valid `token` cookie

pub mod auth;

pub use auth::{verify_session, SessionUser};
