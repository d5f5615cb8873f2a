//! Shared utilities and common types for the OtpGate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types read once at process startup
//! - Response envelopes
//! - Utility functions (phone masking, field validation)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LogFormat, LoggingConfig, ServerConfig, SmsConfig, SmsProvider};
pub use types::{ApiResponse, ValidationFailureResponse};
pub use utils::{phone, validation};
