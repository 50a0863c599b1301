//! Authentication Module
//!
//! This module handles user authentication and session management: the
//! login/logout endpoints, the gated dashboard check, and the JWT
//! session tokens carried in the `token` cookie.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - users table lookup
//! ├── sessions.rs     - JWT token mint/verify and cookie helpers
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request types
//!     ├── login.rs    - POST /login
//!     ├── logout.rs   - GET /logout
//!     └── dashboard.rs - GET /dashboard (gated)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: email and password matched against the `users` table ->
//!    JWT minted -> `token` cookie set
//! 2. **Gate**: protected routes verify the cookie before their handler
//!    runs (see `middleware::auth`)
//! 3. **Logout**: the cookie is cleared; tokens are stateless, so the
//!    server keeps no session table and cannot revoke a token before it
//!    expires
//!
//! # Credential Models
//!
//! Two credential models coexist: the `users` table is matched by direct
//! SQL equality at login, while employee records created through the
//! staff form store a bcrypt digest that is never verified by any route.

/// users table lookup
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::LoginRequest;
pub use handlers::{dashboard, login, logout};
pub use sessions::{create_token, verify_token};
