/**
 * Authentication Handler Types
 */

use serde::{Deserialize, Serialize};

/// Login request
///
/// Contains the email and password for user authentication. Both are
/// matched verbatim against the `users` table.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password
    pub password: String,
}
