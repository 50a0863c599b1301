//! Employee Module
//!
//! CRUD and count endpoints for the `employees` table. Creation goes
//! through a multipart form (the staff signup flow): the submitted
//! password is bcrypt-hashed and the uploaded photo is written to the
//! photo store before the row is inserted.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{
    create_employee, delete_employee, employee_count, full_time_count, get_employee,
    list_employees, part_time_count, update_employee,
};
