//! Domain-specific error types and error handling.

mod types;

pub use types::{DeliveryFailureKind, ProviderError};

use otp_shared::validation::ValidationErrors;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more request fields failed their checks
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// The SMS could not be delivered. Provider detail is only written to the log.
    #[error("Failed to send verification code")]
    DeliveryFailed { kind: DeliveryFailureKind },
}

impl DomainError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "VALIDATION_ERROR",
            DomainError::DeliveryFailed { .. } => "DELIVERY_FAILED",
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors)
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
