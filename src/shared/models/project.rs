//! Project Data Structures

use serde::{Deserialize, Serialize};

/// Project status counted by `/openProjectCount`
pub const STATUS_IN_PROGRESS: &str = "In Progress";
/// Project status counted by `/closedProjectCount`
pub const STATUS_TO_DO: &str = "To Do";

/// A project as stored in the `projects` table.
///
/// The description column is named `desc`, a reserved word in MySQL; it
/// is backticked in SQL and serialized as `desc` in JSON.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub desc: String,
    pub status: String,
}

/// The JSON body of `POST /createProject` and `PUT /updateProject/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectForm {
    pub name: String,
    pub desc: String,
    pub status: String,
}
