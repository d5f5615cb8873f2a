//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::validation::{FieldError, ValidationErrors};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,

    /// Request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    /// Create an error response
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    /// Add request ID for tracing
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

/// Body returned when a request is rejected by field validation
///
/// ```json
/// { "success": false, "errors": [ { "field": "phone", "message": "..." } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationFailureResponse {
    pub success: bool,
    pub errors: Vec<FieldError>,
}

impl From<ValidationErrors> for ValidationFailureResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            errors: errors.into_errors(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_omits_error() {
        let json = serde_json::to_value(ApiResponse::success("ok")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "ok");
        assert!(json.get("error").is_none());
        assert!(json.get("request_id").is_none());
    }

    #[test]
    fn test_error_response_omits_data() {
        let json = serde_json::to_value(
            ApiResponse::<()>::error("Failed to send verification code").with_request_id("req-1"),
        )
        .unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Failed to send verification code");
        assert_eq!(json["request_id"], "req-1");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_validation_failure_body_shape() {
        let mut errors = ValidationErrors::new();
        errors.add_error("phone", "Phone number is required");
        errors.add_error("otp", "OTP is required");

        let json = serde_json::to_value(ValidationFailureResponse::from(errors)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "errors": [
                    {"field": "phone", "message": "Phone number is required"},
                    {"field": "otp", "message": "OTP is required"}
                ]
            })
        );
    }
}
