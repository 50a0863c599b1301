/**
 * Employee Handlers
 *
 * HTTP handlers for employee CRUD and counts:
 *
 * - `GET /getEmployees` - full listing
 * - `GET /get/{id}` - zero-or-one row
 * - `POST /create` - multipart creation form (photo upload + bcrypt)
 * - `PUT /update/{id}` - full-row overwrite
 * - `DELETE /delete/{id}` - delete by id
 * - `GET /employeeCount`, `/fullTimeEmployeeCount`, `/partTimeEmployeeCount`
 *
 * Store faults map to handler-specific `Error` messages; the SQL detail
 * is logged server-side only.
 */

use std::collections::HashMap;

use axum::extract::{Multipart, Path, State};
use axum::response::Json;
use serde_json::{json, Value};
use sqlx::MySqlPool;

use crate::backend::employees::db;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::uploads::PhotoStore;
use crate::shared::envelope::Envelope;
use crate::shared::models::employee::{
    Employee, EmployeeForm, EmployeeUpdate, STATUS_FULL_TIME, STATUS_PART_TIME,
};

/// bcrypt cost factor for employee passwords
const HASH_COST: u32 = 10;

/// List every employee.
pub async fn list_employees(
    State(pool): State<MySqlPool>,
) -> Result<Json<Envelope<Vec<Employee>>>, BackendError> {
    let rows = db::list(&pool).await.map_err(|e| {
        tracing::error!("employee list query failed: {e}");
        BackendError::query("Get employee error in query", e)
    })?;
    Ok(Json(Envelope::with_result(rows)))
}

/// Fetch one employee by id for the edit form.
pub async fn get_employee(
    State(pool): State<MySqlPool>,
    Path(id): Path<i32>,
) -> Result<Json<Envelope<Vec<Employee>>>, BackendError> {
    let rows = db::get(&pool, id).await.map_err(|e| {
        tracing::error!("employee get query failed for id {id}: {e}");
        BackendError::query("Get employee error in query", e)
    })?;
    Ok(Json(Envelope::with_result(rows)))
}

/// Create an employee from the multipart signup form.
///
/// The `photo` file part is stored to disk first; the password field is
/// bcrypt-hashed before the insert. A hashing fault aborts the operation
/// with no row written.
pub async fn create_employee(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Envelope>, BackendError> {
    let (form, photo) = read_creation_form(multipart, &state.photos).await?;

    let digest = bcrypt::hash(&form.password, HASH_COST).map_err(|e| {
        tracing::error!("password hashing failed: {e}");
        BackendError::Hashing(e)
    })?;

    db::insert(&state.db_pool, &form, &digest, &photo)
        .await
        .map_err(|e| {
            tracing::error!("employee insert failed: {e}");
            BackendError::query("Inside signup query", e)
        })?;

    Ok(Json(Envelope::success()))
}

/// Overwrite an employee row in full.
pub async fn update_employee(
    State(pool): State<MySqlPool>,
    Path(id): Path<i32>,
    Json(fields): Json<EmployeeUpdate>,
) -> Result<Json<Envelope>, BackendError> {
    db::update(&pool, id, &fields).await.map_err(|e| {
        tracing::error!("employee update failed for id {id}: {e}");
        BackendError::query("Update employee error in query", e)
    })?;
    Ok(Json(Envelope::success()))
}

/// Delete an employee by id. Deleting a missing id succeeds.
pub async fn delete_employee(
    State(pool): State<MySqlPool>,
    Path(id): Path<i32>,
) -> Result<Json<Envelope>, BackendError> {
    db::delete(&pool, id).await.map_err(|e| {
        tracing::error!("employee delete failed for id {id}: {e}");
        BackendError::query("Delete employee error in query", e)
    })?;
    Ok(Json(Envelope::success()))
}

/// Total employee count, as `[{"employee": n}]`.
pub async fn employee_count(State(pool): State<MySqlPool>) -> Result<Json<Value>, BackendError> {
    let count = db::count_all(&pool).await.map_err(|e| {
        tracing::error!("employee count query failed: {e}");
        BackendError::query("Error in running query", e)
    })?;
    Ok(Json(json!([{ "employee": count }])))
}

/// Full-time employee count, as `[{"fullTimeCount": n}]`.
pub async fn full_time_count(State(pool): State<MySqlPool>) -> Result<Json<Value>, BackendError> {
    let count = db::count_by_status(&pool, STATUS_FULL_TIME)
        .await
        .map_err(|e| {
            tracing::error!("full-time count query failed: {e}");
            BackendError::query("Error in running query", e)
        })?;
    Ok(Json(json!([{ "fullTimeCount": count }])))
}

/// Part-time employee count, as `[{"partTimeCount": n}]`.
pub async fn part_time_count(State(pool): State<MySqlPool>) -> Result<Json<Value>, BackendError> {
    let count = db::count_by_status(&pool, STATUS_PART_TIME)
        .await
        .map_err(|e| {
            tracing::error!("part-time count query failed: {e}");
            BackendError::query("Error in running query", e)
        })?;
    Ok(Json(json!([{ "partTimeCount": count }])))
}

/// Consume the multipart creation form: text fields into an
/// `EmployeeForm`, the `photo` file part into the photo store.
async fn read_creation_form(
    mut multipart: Multipart,
    photos: &PhotoStore,
) -> Result<(EmployeeForm, String), BackendError> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut photo: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| BackendError::Upload(format!("Malformed upload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "photo" {
            let original = field.file_name().unwrap_or("photo").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| BackendError::Upload(format!("Malformed upload: {e}")))?;
            let stored = photos.store("photo", &original, &data).await.map_err(|e| {
                tracing::error!("photo write failed: {e}");
                BackendError::Upload("Error storing photo".to_string())
            })?;
            photo = Some(stored);
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| BackendError::Upload(format!("Malformed upload: {e}")))?;
            fields.insert(name, value);
        }
    }

    let photo = photo.ok_or_else(|| BackendError::Upload("Photo file is required".to_string()))?;
    Ok((EmployeeForm::from_fields(fields), photo))
}
