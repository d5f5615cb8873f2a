//! # OtpGate Core
//!
//! Core business logic for the OtpGate backend: the one-time password value
//! object, the verification request checks, the OTP issuer and its provider
//! seam, and the error types that flow out of them.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
