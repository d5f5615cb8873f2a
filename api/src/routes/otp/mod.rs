//! OTP route handlers
//!
//! - `POST /api/v1/otp/send` generates a code and sends it by SMS
//! - `POST /api/v1/otp/verify` runs the verification gate

pub mod send_otp;
pub mod verify_otp;

use std::sync::Arc;

use otp_core::services::OtpIssuer;

/// Application state that holds shared services
pub struct AppState {
    pub issuer: Arc<OtpIssuer>,
}

impl AppState {
    pub fn new(issuer: Arc<OtpIssuer>) -> Self {
        Self { issuer }
    }
}
