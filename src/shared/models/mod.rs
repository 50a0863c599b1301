//! Entity Models
//!
//! This module contains the data structures for the three entity families
//! stored in MySQL:
//!
//! - `Employee` - A staff member, created through the multipart signup form
//! - `Project` - A project tracked on the dashboard
//! - `Ticket` - A support ticket assigned to an employee

pub mod employee;
pub mod project;
pub mod ticket;

// Re-export all types
pub use employee::{Employee, EmployeeForm, EmployeeUpdate};
pub use project::{Project, ProjectForm};
pub use ticket::{Ticket, TicketForm};
