//! Domain layer containing the OTP value object and the verification request.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
