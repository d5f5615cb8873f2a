use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use std::fmt;
use uuid::Uuid;

use otp_core::errors::DomainError;
use otp_shared::types::{ApiResponse, ValidationFailureResponse};
use otp_shared::validation::ValidationErrors;

const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Request ID from the `X-Request-ID` header, or a fresh one
pub fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// 400 with the full list of field errors
pub fn validation_failure(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ValidationFailureResponse::from(errors))
}

/// Map a domain error onto its HTTP response
///
/// Delivery failures expose only the generic message; the provider detail was
/// already logged by the issuer.
pub fn handle_domain_error(error: &DomainError, request_id: &str) -> HttpResponse {
    match error {
        DomainError::Validation(errors) => validation_failure(errors.clone()),
        DomainError::DeliveryFailed { kind } => {
            tracing::warn!(
                request_id = %request_id,
                error_code = error.error_code(),
                failure_kind = %kind,
                "Responding with delivery failure"
            );
            HttpResponse::ServiceUnavailable()
                .json(ApiResponse::<()>::error(error.to_string()).with_request_id(request_id))
        }
    }
}

/// Rejection produced by validating extractors
#[derive(Debug)]
pub struct RejectedRequest(pub ValidationErrors);

impl fmt::Display for RejectedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request rejected: {}", self.0)
    }
}

impl ResponseError for RejectedRequest {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        validation_failure(self.0.clone())
    }
}

impl From<ValidationErrors> for RejectedRequest {
    fn from(errors: ValidationErrors) -> Self {
        Self(errors)
    }
}
