//! JSON error-response body shared by handlers and middleware

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body returned to clients alongside a non-2xx status.
///
/// `error` is a stable machine-readable code; `message` is for humans.
/// `details` carries per-field validation messages when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g. `EMAIL_EXISTS`)
    pub error: String,

    /// Human-readable description
    pub message: String,

    /// Per-field validation messages, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Vec<String>>>,

    /// Time the error was produced
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create an error response with a code and message
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach per-field detail messages
    pub fn with_details(mut self, details: HashMap<String, Vec<String>>) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_empty_details() {
        let response = ErrorResponse::new("NOT_FOUND", "Home not found");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "NOT_FOUND");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn carries_field_details() {
        let mut details = HashMap::new();
        details.insert("email".to_string(), vec!["invalid email".to_string()]);
        let response = ErrorResponse::new("VALIDATION_ERROR", "Invalid request").with_details(details);
        assert!(response.details.is_some());
    }
}
