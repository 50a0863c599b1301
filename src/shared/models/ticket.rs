//! Ticket Data Structures

use serde::{Deserialize, Serialize};

/// Ticket status counted by `/ticketsToDoCount`
pub const STATUS_OPEN: &str = "Open";
/// Ticket status counted by `/ticketsInProgressCount`
pub const STATUS_CLOSE: &str = "Close";

/// A support ticket as stored in the `tickets` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ticket {
    pub id: i32,
    pub title: String,
    pub desc: String,
    pub priority: String,
    pub status: String,
    pub assignee: String,
}

/// The JSON body of `POST /createTicket` and `PUT /updateTicket/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketForm {
    pub title: String,
    pub desc: String,
    pub priority: String,
    pub status: String,
    pub assignee: String,
}
