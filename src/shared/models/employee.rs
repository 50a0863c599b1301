//! Employee Data Structures
//!
//! Represents a staff member row and the two payload shapes that mutate it:
//! the multipart creation form and the JSON full-row update.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Employment status value counted by `/fullTimeEmployeeCount`
pub const STATUS_FULL_TIME: &str = "Full-Time";
/// Employment status value counted by `/partTimeEmployeeCount`
pub const STATUS_PART_TIME: &str = "Part-Time";

/// A staff member as stored in the `employees` table.
///
/// Rows are returned to the client as-is; all non-id columns are text and
/// round-trip the submitted form values verbatim. `password` holds the
/// bcrypt digest produced at creation time, `photo` the stored upload
/// filename.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub dob: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub job: String,
    pub department: String,
    pub manager: String,
    pub salary: String,
    pub status: String,
    pub photo: String,
    pub project: String,
}

/// The field set submitted by the employee creation form.
///
/// Built from the text parts of the multipart request; the `photo` file
/// part is stored separately and its filename recorded on the row.
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub dob: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub job: String,
    pub department: String,
    pub manager: String,
    pub salary: String,
    pub status: String,
    pub project: String,
}

impl EmployeeForm {
    /// Build a form from collected multipart text fields.
    ///
    /// Missing fields coerce to the empty string; unknown fields are
    /// ignored.
    pub fn from_fields(mut fields: HashMap<String, String>) -> Self {
        let mut take = |key: &str| fields.remove(key).unwrap_or_default();
        Self {
            name: take("name"),
            email: take("email"),
            password: take("password"),
            dob: take("dob"),
            phone: take("phone"),
            address: take("address"),
            city: take("city"),
            state: take("state"),
            zip: take("zip"),
            job: take("job"),
            department: take("department"),
            manager: take("manager"),
            salary: take("salary"),
            status: take("status"),
            project: take("project"),
        }
    }
}

/// The JSON body of `PUT /update/{id}`.
///
/// A full-row overwrite: every listed column is replaced. The password
/// digest and photo filename are not part of the update surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: String,
    pub email: String,
    pub dob: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub job: String,
    pub department: String,
    pub manager: String,
    pub salary: String,
    pub status: String,
    pub project: String,
}
