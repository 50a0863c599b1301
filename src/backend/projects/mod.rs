//! Project Module
//!
//! CRUD and count endpoints for the `projects` table.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{
    closed_project_count, create_project, delete_project, get_project, list_projects,
    open_project_count, project_count, update_project,
};
