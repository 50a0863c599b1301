/**
 * User Lookup
 *
 * This module handles the `users` table, which exists purely for
 * authentication; none of the CRUD routes mutate it.
 */

use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

/// A row of the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, embedded in session tokens
    pub id: i32,
    /// Login email
    pub email: String,
    /// Stored credential, compared verbatim at login
    pub password: String,
}

/// Find the user matching an email/password pair.
///
/// The comparison is a direct equality match in SQL against the stored
/// value; employee records created through the staff endpoints use
/// bcrypt digests instead, and the two models are intentionally left
/// separate. When several rows match, the first is taken.
pub async fn find_by_credentials(
    pool: &MySqlPool,
    email: &str,
    password: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password
        FROM users
        WHERE email = ? AND password = ?
        "#,
    )
    .bind(email)
    .bind(password)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
