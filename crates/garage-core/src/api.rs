//! Repository call envelope types.
//!
//! Repository wrappers around the backend resolve to [`ApiEnvelope`] or fail
//! with a normalized [`ApiError`]. The console core never calls them itself;
//! pages use these types to report outcomes through the toast channel.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Successful repository response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Normalized repository failure.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message} (status {status})")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

pub type ApiResult<T> = std::result::Result<ApiEnvelope<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_parses_backend_shape() {
        let envelope: ApiEnvelope<Vec<u32>> =
            serde_json::from_value(json!({"success": true, "data": [1, 2], "message": "ok"}))
                .unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(vec![1, 2]));
        assert_eq!(envelope.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::new(422, "Plate number already registered")
            .with_details(json!({"field": "plate"}));
        assert_eq!(err.to_string(), "Plate number already registered (status 422)");
        assert!(!err.is_unauthorized());
    }
}
