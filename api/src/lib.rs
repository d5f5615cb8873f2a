//! HTTP surface for OTP issuance and the verification gate
//!
//! The binary in `main.rs` wires configuration, telemetry and the messaging
//! client; everything route-related lives here so integration tests can build
//! the same application.

pub mod app;
pub mod dto;
pub mod env_files;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::configure;
pub use routes::otp::AppState;
