//! StaffDesk - Main Library
//!
//! StaffDesk is the HTTP backend for a staff-management dashboard. It
//! exposes CRUD endpoints for employees, projects, and tickets over a
//! MySQL store, plus a minimal cookie-based login flow.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared between the server and its clients
//!   - Entity models (employees, projects, tickets)
//!   - The uniform response envelope
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, route table, and middleware
//!   - Authentication (JWT session tokens, login/logout)
//!   - Database access and photo upload storage
//!
//! # Usage
//!
//! ```rust,no_run
//! use staffdesk::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let app = create_app().await?;
//! // Use app with an Axum server
//! # Ok(())
//! # }
//! ```

/// Types shared between the server and its clients
pub mod shared;

/// Server-side code
pub mod backend;
