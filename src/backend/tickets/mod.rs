//! Ticket Module
//!
//! CRUD and count endpoints for the `tickets` table.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{
    create_ticket, delete_ticket, get_ticket, list_tickets, ticket_count, tickets_closed_count,
    tickets_open_count, update_ticket,
};
