//! Database operations for projects
//!
//! The description column is a reserved word and stays backticked in
//! every statement.

use sqlx::MySqlPool;

use crate::shared::models::project::{Project, ProjectForm};

/// Fetch every project row, unordered.
pub async fn list(pool: &MySqlPool) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects")
        .fetch_all(pool)
        .await
}

/// Fetch zero-or-one project by id.
pub async fn get(pool: &MySqlPool, id: i32) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
        .bind(id)
        .fetch_all(pool)
        .await
}

/// Insert a new project row.
pub async fn insert(pool: &MySqlPool, form: &ProjectForm) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO projects (name, `desc`, status) VALUES (?, ?, ?)")
        .bind(&form.name)
        .bind(&form.desc)
        .bind(&form.status)
        .execute(pool)
        .await?;

    Ok(())
}

/// Overwrite a project row in full. A missing id succeeds silently.
pub async fn update(pool: &MySqlPool, id: i32, form: &ProjectForm) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE projects SET name = ?, `desc` = ?, status = ? WHERE id = ?")
        .bind(&form.name)
        .bind(&form.desc)
        .bind(&form.status)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete at most one project row.
pub async fn delete(pool: &MySqlPool, id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM projects WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Count all project rows.
pub async fn count_all(pool: &MySqlPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM projects")
        .fetch_one(pool)
        .await
}

/// Count project rows with the given status.
pub async fn count_by_status(pool: &MySqlPool, status: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects WHERE status = ?")
        .bind(status)
        .fetch_one(pool)
        .await
}
