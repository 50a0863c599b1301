//! Database operations for tickets

use sqlx::MySqlPool;

use crate::shared::models::ticket::{Ticket, TicketForm};

/// Fetch every ticket row, unordered.
pub async fn list(pool: &MySqlPool) -> Result<Vec<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>("SELECT * FROM tickets")
        .fetch_all(pool)
        .await
}

/// Fetch zero-or-one ticket by id.
pub async fn get(pool: &MySqlPool, id: i32) -> Result<Vec<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = ?")
        .bind(id)
        .fetch_all(pool)
        .await
}

/// Insert a new ticket row.
pub async fn insert(pool: &MySqlPool, form: &TicketForm) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO tickets (title, `desc`, priority, status, assignee) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&form.title)
    .bind(&form.desc)
    .bind(&form.priority)
    .bind(&form.status)
    .bind(&form.assignee)
    .execute(pool)
    .await?;

    Ok(())
}

/// Overwrite a ticket row in full. A missing id succeeds silently.
pub async fn update(pool: &MySqlPool, id: i32, form: &TicketForm) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE tickets SET title = ?, `desc` = ?, priority = ?, status = ?, assignee = ? WHERE id = ?",
    )
    .bind(&form.title)
    .bind(&form.desc)
    .bind(&form.priority)
    .bind(&form.status)
    .bind(&form.assignee)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete at most one ticket row.
pub async fn delete(pool: &MySqlPool, id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM tickets WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Count all ticket rows.
pub async fn count_all(pool: &MySqlPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM tickets")
        .fetch_one(pool)
        .await
}

/// Count ticket rows with the given status.
pub async fn count_by_status(pool: &MySqlPool, status: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tickets WHERE status = ?")
        .bind(status)
        .fetch_one(pool)
        .await
}
