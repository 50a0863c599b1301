/**
 * Project Handlers
 *
 * HTTP handlers for project CRUD and counts:
 *
 * - `GET /getProjects`, `GET /getProject/{id}`
 * - `POST /createProject`, `PUT /updateProject/{id}`,
 *   `DELETE /deleteProjects/{id}`
 * - `GET /projectCount`, `/openProjectCount`, `/closedProjectCount`
 *
 * The count field names mirror the dashboard widgets: `/openProjectCount`
 * counts "In Progress" rows and `/closedProjectCount` counts "To Do"
 * rows under `closeProjectCount`.
 */

use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{json, Value};
use sqlx::MySqlPool;

use crate::backend::error::BackendError;
use crate::backend::projects::db;
use crate::shared::envelope::Envelope;
use crate::shared::models::project::{Project, ProjectForm, STATUS_IN_PROGRESS, STATUS_TO_DO};

/// List every project.
pub async fn list_projects(
    State(pool): State<MySqlPool>,
) -> Result<Json<Envelope<Vec<Project>>>, BackendError> {
    let rows = db::list(&pool).await.map_err(|e| {
        tracing::error!("project list query failed: {e}");
        BackendError::query("Get projects error in query", e)
    })?;
    Ok(Json(Envelope::with_result(rows)))
}

/// Fetch one project by id for the edit form.
pub async fn get_project(
    State(pool): State<MySqlPool>,
    Path(id): Path<i32>,
) -> Result<Json<Envelope<Vec<Project>>>, BackendError> {
    let rows = db::get(&pool, id).await.map_err(|e| {
        tracing::error!("project get query failed for id {id}: {e}");
        BackendError::query("Get project error in query", e)
    })?;
    Ok(Json(Envelope::with_result(rows)))
}

/// Create a project.
pub async fn create_project(
    State(pool): State<MySqlPool>,
    Json(form): Json<ProjectForm>,
) -> Result<Json<Envelope>, BackendError> {
    db::insert(&pool, &form).await.map_err(|e| {
        tracing::error!("project insert failed: {e}");
        BackendError::query("Inside project query", e)
    })?;
    Ok(Json(Envelope::success()))
}

/// Overwrite a project row in full.
pub async fn update_project(
    State(pool): State<MySqlPool>,
    Path(id): Path<i32>,
    Json(form): Json<ProjectForm>,
) -> Result<Json<Envelope>, BackendError> {
    db::update(&pool, id, &form).await.map_err(|e| {
        tracing::error!("project update failed for id {id}: {e}");
        BackendError::query("Update project error in query", e)
    })?;
    Ok(Json(Envelope::success()))
}

/// Delete a project by id. Deleting a missing id succeeds.
pub async fn delete_project(
    State(pool): State<MySqlPool>,
    Path(id): Path<i32>,
) -> Result<Json<Envelope>, BackendError> {
    db::delete(&pool, id).await.map_err(|e| {
        tracing::error!("project delete failed for id {id}: {e}");
        BackendError::query("Delete project error in query", e)
    })?;
    Ok(Json(Envelope::success()))
}

/// Total project count, as `[{"project": n}]`.
pub async fn project_count(State(pool): State<MySqlPool>) -> Result<Json<Value>, BackendError> {
    let count = db::count_all(&pool).await.map_err(|e| {
        tracing::error!("project count query failed: {e}");
        BackendError::query("Error in running query", e)
    })?;
    Ok(Json(json!([{ "project": count }])))
}

/// In-progress project count, as `[{"openProjectCount": n}]`.
pub async fn open_project_count(
    State(pool): State<MySqlPool>,
) -> Result<Json<Value>, BackendError> {
    let count = db::count_by_status(&pool, STATUS_IN_PROGRESS)
        .await
        .map_err(|e| {
            tracing::error!("open project count query failed: {e}");
            BackendError::query("Error in running query", e)
        })?;
    Ok(Json(json!([{ "openProjectCount": count }])))
}

/// To-do project count, as `[{"closeProjectCount": n}]`.
pub async fn closed_project_count(
    State(pool): State<MySqlPool>,
) -> Result<Json<Value>, BackendError> {
    let count = db::count_by_status(&pool, STATUS_TO_DO).await.map_err(|e| {
        tracing::error!("closed project count query failed: {e}");
        BackendError::query("Error in running query", e)
    })?;
    Ok(Json(json!([{ "closeProjectCount": count }])))
}
