//! Client-side API error type and backend error-body decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON error envelope returned by the backend. The auth, REST, and function
/// subsystems use different field names for the human-readable part, so all
/// of them are optional here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Extract a user-facing message from a backend error body, trying the field
/// names each subsystem uses. Returns `None` when the body is not a
/// recognizable error envelope.
pub fn backend_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<BackendErrorBody>(body).ok()?;
    [
        parsed.error_description,
        parsed.msg,
        parsed.message,
        parsed.error,
    ]
    .into_iter()
    .flatten()
    .find(|m| !m.trim().is_empty())
}

/// Error type for backend calls made by the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("not found")]
    NotFound,
}

impl ApiError {
    /// Best-effort human-readable message for toasts and inline error text.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { status, body } => backend_error_message(body)
                .unwrap_or_else(|| format!("Request failed (HTTP {status})")),
            ApiError::Network(_) => "Network error. Check your connection and try again.".to_string(),
            ApiError::Decode(_) => "Unexpected response from the server.".to_string(),
            ApiError::NotFound => "Not found.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_error_description_over_error_code() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(
            backend_error_message(body).as_deref(),
            Some("Invalid login credentials")
        );
    }

    #[test]
    fn falls_back_through_msg_and_message() {
        assert_eq!(
            backend_error_message(r#"{"msg":"Token has expired"}"#).as_deref(),
            Some("Token has expired")
        );
        assert_eq!(
            backend_error_message(r#"{"message":"row-level security violation"}"#).as_deref(),
            Some("row-level security violation")
        );
    }

    #[test]
    fn unrecognizable_bodies_yield_none() {
        assert_eq!(backend_error_message("<html>502</html>"), None);
        assert_eq!(backend_error_message(r#"{"error":"  "}"#), None);
    }

    #[test]
    fn user_message_uses_body_when_available() {
        let err = ApiError::Http {
            status: 401,
            body: r#"{"msg":"Invalid token"}"#.to_string(),
        };
        assert_eq!(err.user_message(), "Invalid token");

        let opaque = ApiError::Http {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(opaque.user_message(), "Request failed (HTTP 500)");
    }
}
