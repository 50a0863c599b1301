//! Database operations for employees
//!
//! Each operation is a single parameterized statement; the store is the
//! sole arbiter of concurrent writes.

use sqlx::MySqlPool;

use crate::shared::models::employee::{Employee, EmployeeForm, EmployeeUpdate};

/// Fetch every employee row, unordered.
pub async fn list(pool: &MySqlPool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees")
        .fetch_all(pool)
        .await
}

/// Fetch zero-or-one employee by id.
///
/// A missing id yields an empty result set, indistinguishable from an
/// empty table slice; callers treat both as success.
pub async fn get(pool: &MySqlPool, id: i32) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?")
        .bind(id)
        .fetch_all(pool)
        .await
}

/// Insert a new employee row.
///
/// `password_hash` is the bcrypt digest, `photo` the stored upload
/// filename; the generated id is not reported back.
pub async fn insert(
    pool: &MySqlPool,
    form: &EmployeeForm,
    password_hash: &str,
    photo: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO employees
            (name, email, password, dob, phone, address, city, state, zip,
             job, department, manager, salary, status, photo, project)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&form.name)
    .bind(&form.email)
    .bind(password_hash)
    .bind(&form.dob)
    .bind(&form.phone)
    .bind(&form.address)
    .bind(&form.city)
    .bind(&form.state)
    .bind(&form.zip)
    .bind(&form.job)
    .bind(&form.department)
    .bind(&form.manager)
    .bind(&form.salary)
    .bind(&form.status)
    .bind(photo)
    .bind(&form.project)
    .execute(pool)
    .await?;

    Ok(())
}

/// Overwrite an employee row in full.
///
/// Updating a missing id succeeds with zero rows affected. The password
/// digest and photo filename are left untouched.
pub async fn update(pool: &MySqlPool, id: i32, fields: &EmployeeUpdate) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE employees
        SET name = ?, email = ?, dob = ?, phone = ?, address = ?, city = ?,
            state = ?, zip = ?, job = ?, department = ?, manager = ?,
            salary = ?, status = ?, project = ?
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.email)
    .bind(&fields.dob)
    .bind(&fields.phone)
    .bind(&fields.address)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.zip)
    .bind(&fields.job)
    .bind(&fields.department)
    .bind(&fields.manager)
    .bind(&fields.salary)
    .bind(&fields.status)
    .bind(&fields.project)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete at most one employee row. Deleting a missing id succeeds.
pub async fn delete(pool: &MySqlPool, id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Count all employee rows.
pub async fn count_all(pool: &MySqlPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM employees")
        .fetch_one(pool)
        .await
}

/// Count employee rows with the given employment status.
pub async fn count_by_status(pool: &MySqlPool, status: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees WHERE status = ?")
        .bind(status)
        .fetch_one(pool)
        .await
}
