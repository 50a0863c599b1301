//! Uniform Response Envelope
//!
//! Every route responds with the same JSON wrapper: `{Status, Result}` on
//! success, `{Error}` (with `Status` on login failures) otherwise. Clients
//! branch on the body fields, not the HTTP status code, so the field
//! capitalization here is part of the wire contract.

use serde::{Deserialize, Serialize};

/// The uniform `{Status, Result}` / `{Error}` response wrapper.
///
/// Absent fields are omitted from the serialized body entirely, matching
/// the shapes the dashboard front-end expects:
///
/// - reads: `{"Status": "Success", "Result": [...]}`
/// - writes: `{"Status": "Success"}`
/// - handler failures: `{"Error": "..."}`
/// - login failures: `{"Status": "Error", "Error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = ()> {
    /// Outcome tag: `"Success"` or `"Error"`
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Result payload for read endpoints
    #[serde(rename = "Result", skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Error message for failed requests
    #[serde(rename = "Error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

const STATUS_SUCCESS: &str = "Success";
const STATUS_ERROR: &str = "Error";

impl Envelope<()> {
    /// A bare `{"Status": "Success"}` body, used by write endpoints.
    pub fn success() -> Self {
        Self {
            status: Some(STATUS_SUCCESS.to_string()),
            result: None,
            error: None,
        }
    }

    /// An `{"Error": msg}` body, used by failed handlers.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: None,
            result: None,
            error: Some(message.into()),
        }
    }

    /// A `{"Status": "Error", "Error": msg}` body, used by login failures.
    pub fn status_error(message: impl Into<String>) -> Self {
        Self {
            status: Some(STATUS_ERROR.to_string()),
            result: None,
            error: Some(message.into()),
        }
    }
}

impl<T> Envelope<T> {
    /// A `{"Status": "Success", "Result": value}` body, used by reads.
    pub fn with_result(value: T) -> Self {
        Self {
            status: Some(STATUS_SUCCESS.to_string()),
            result: Some(value),
            error: None,
        }
    }

    /// Whether this envelope carries a success status.
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let value = serde_json::to_value(Envelope::success()).unwrap();
        assert_eq!(value, json!({ "Status": "Success" }));
    }

    #[test]
    fn test_result_shape() {
        let value = serde_json::to_value(Envelope::with_result(vec![1, 2, 3])).unwrap();
        assert_eq!(value, json!({ "Status": "Success", "Result": [1, 2, 3] }));
    }

    #[test]
    fn test_error_shape_has_no_status() {
        let value = serde_json::to_value(Envelope::error("Get employee error in query")).unwrap();
        assert_eq!(value, json!({ "Error": "Get employee error in query" }));
    }

    #[test]
    fn test_status_error_shape() {
        let value = serde_json::to_value(Envelope::status_error("Wrong email or password")).unwrap();
        assert_eq!(
            value,
            json!({ "Status": "Error", "Error": "Wrong email or password" })
        );
    }

    #[test]
    fn test_round_trip() {
        let envelope = Envelope::with_result(vec!["Alpha".to_string()]);
        let body = serde_json::to_string(&envelope).unwrap();
        let parsed: Envelope<Vec<String>> = serde_json::from_str(&body).unwrap();
        assert!(parsed.is_success());
        assert_eq!(parsed.result, Some(vec!["Alpha".to_string()]));
    }
}
