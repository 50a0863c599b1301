/**
 * Ticket Handlers
 *
 * HTTP handlers for ticket CRUD and counts:
 *
 * - `GET /getTickets`, `GET /getTicket/{id}`
 * - `POST /createTicket`, `PUT /updateTicket/{id}`,
 *   `DELETE /deleteTickets/{id}`
 * - `GET /ticketCount`, `/ticketsToDoCount`, `/ticketsInProgressCount`
 *
 * As with projects, the count field names mirror the dashboard widgets:
 * `/ticketsToDoCount` counts "Open" rows under `openTicketCount` and
 * `/ticketsInProgressCount` counts "Close" rows under
 * `closedTicketCount`.
 */

use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{json, Value};
use sqlx::MySqlPool;

use crate::backend::error::BackendError;
use crate::backend::tickets::db;
use crate::shared::envelope::Envelope;
use crate::shared::models::ticket::{Ticket, TicketForm, STATUS_CLOSE, STATUS_OPEN};

/// List every ticket.
pub async fn list_tickets(
    State(pool): State<MySqlPool>,
) -> Result<Json<Envelope<Vec<Ticket>>>, BackendError> {
    let rows = db::list(&pool).await.map_err(|e| {
        tracing::error!("ticket list query failed: {e}");
        BackendError::query("Get tickets error in query", e)
    })?;
    Ok(Json(Envelope::with_result(rows)))
}

/// Fetch one ticket by id for the edit form.
pub async fn get_ticket(
    State(pool): State<MySqlPool>,
    Path(id): Path<i32>,
) -> Result<Json<Envelope<Vec<Ticket>>>, BackendError> {
    let rows = db::get(&pool, id).await.map_err(|e| {
        tracing::error!("ticket get query failed for id {id}: {e}");
        BackendError::query("Get ticket error in query", e)
    })?;
    Ok(Json(Envelope::with_result(rows)))
}

/// Create a ticket.
pub async fn create_ticket(
    State(pool): State<MySqlPool>,
    Json(form): Json<TicketForm>,
) -> Result<Json<Envelope>, BackendError> {
    db::insert(&pool, &form).await.map_err(|e| {
        tracing::error!("ticket insert failed: {e}");
        BackendError::query("Inside ticket query", e)
    })?;
    Ok(Json(Envelope::success()))
}

/// Overwrite a ticket row in full.
pub async fn update_ticket(
    State(pool): State<MySqlPool>,
    Path(id): Path<i32>,
    Json(form): Json<TicketForm>,
) -> Result<Json<Envelope>, BackendError> {
    db::update(&pool, id, &form).await.map_err(|e| {
        tracing::error!("ticket update failed for id {id}: {e}");
        BackendError::query("Update ticket error in query", e)
    })?;
    Ok(Json(Envelope::success()))
}

/// Delete a ticket by id. Deleting a missing id succeeds.
pub async fn delete_ticket(
    State(pool): State<MySqlPool>,
    Path(id): Path<i32>,
) -> Result<Json<Envelope>, BackendError> {
    db::delete(&pool, id).await.map_err(|e| {
        tracing::error!("ticket delete failed for id {id}: {e}");
        BackendError::query("Delete ticket error in query", e)
    })?;
    Ok(Json(Envelope::success()))
}

/// Total ticket count, as `[{"ticket": n}]`.
pub async fn ticket_count(State(pool): State<MySqlPool>) -> Result<Json<Value>, BackendError> {
    let count = db::count_all(&pool).await.map_err(|e| {
        tracing::error!("ticket count query failed: {e}");
        BackendError::query("Error in running query", e)
    })?;
    Ok(Json(json!([{ "ticket": count }])))
}

/// Open ticket count, as `[{"openTicketCount": n}]`.
pub async fn tickets_open_count(
    State(pool): State<MySqlPool>,
) -> Result<Json<Value>, BackendError> {
    let count = db::count_by_status(&pool, STATUS_OPEN).await.map_err(|e| {
        tracing::error!("open ticket count query failed: {e}");
        BackendError::query("Error in running query", e)
    })?;
    Ok(Json(json!([{ "openTicketCount": count }])))
}

/// Closed ticket count, as `[{"closedTicketCount": n}]`.
pub async fn tickets_closed_count(
    State(pool): State<MySqlPool>,
) -> Result<Json<Value>, BackendError> {
    let count = db::count_by_status(&pool, STATUS_CLOSE).await.map_err(|e| {
        tracing::error!("closed ticket count query failed: {e}");
        BackendError::query("Error in running query", e)
    })?;
    Ok(Json(json!([{ "closedTicketCount": count }])))
}
