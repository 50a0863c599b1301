//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports
//! ├── state.rs   - AppState and FromRef implementations
//! ├── config.rs  - Environment configuration and database connection
//! └── init.rs    - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: read the database URL, port, and upload root
//!    from the environment
//! 2. **Database**: connect the MySQL pool and run migrations
//! 3. **State**: assemble `AppState` (pool + photo store)
//! 4. **Router**: configure all routes and middleware

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
