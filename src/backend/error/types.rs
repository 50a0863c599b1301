/**
 * Backend Error Types
 *
 * This module defines the error taxonomy for the backend:
 *
 * - `Unauthorized` - The session gate rejected the request
 * - `WrongCredentials` - Login found no matching user row
 * - `Query` - A database statement failed
 * - `Hashing` - Password hashing failed during employee creation
 * - `Upload` - A multipart upload could not be read or stored
 *
 * The `Display` value of each variant is exactly the message string the
 * client receives in the `Error` field.
 */

use thiserror::Error;

/// Backend-specific error types
///
/// Each variant carries the client-facing message; internal detail (the
/// underlying sqlx or bcrypt error) is attached as a source and logged at
/// the failure site, never serialized to the client.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The session gate rejected the request.
    ///
    /// `"You are not authorized"` when no token cookie is present,
    /// `"Wrong token"` when the token fails verification.
    #[error("{0}")]
    Unauthorized(&'static str),

    /// Login credentials matched no user row.
    #[error("Wrong email or password")]
    WrongCredentials,

    /// A database statement failed.
    ///
    /// `context` is the handler-specific message string; the SQL failure
    /// detail stays server-side.
    #[error("{context}")]
    Query {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Password hashing failed during employee creation.
    #[error("Error in hashing password")]
    Hashing(#[from] bcrypt::BcryptError),

    /// A multipart upload could not be read or stored.
    #[error("{0}")]
    Upload(String),
}

impl BackendError {
    /// Create a query error with a handler-specific context message.
    pub fn query(context: &'static str, source: sqlx::Error) -> Self {
        Self::Query { context, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_message() {
        let error = BackendError::Unauthorized("You are not authorized");
        assert_eq!(error.to_string(), "You are not authorized");
    }

    #[test]
    fn test_wrong_credentials_message() {
        assert_eq!(
            BackendError::WrongCredentials.to_string(),
            "Wrong email or password"
        );
    }

    #[test]
    fn test_query_error_hides_sql_detail() {
        let error = BackendError::query("Get employee error in query", sqlx::Error::RowNotFound);
        assert_eq!(error.to_string(), "Get employee error in query");
    }
}
