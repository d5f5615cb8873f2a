//! Request and response bodies for the OTP endpoints

use serde::{Deserialize, Serialize};

use otp_core::domain::{PHONE_FIELD, PHONE_REQUIRED_MESSAGE};
use otp_shared::validation::{lenient, validators, Validate, ValidationErrors};

pub const CODE_SENT_MESSAGE: &str = "Verification code sent";

/// Body of `POST /api/v1/otp/send`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendOtpRequest {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub phone: String,
}

impl Validate for SendOtpRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !validators::not_blank(&self.phone) {
            errors.add_error(PHONE_FIELD, PHONE_REQUIRED_MESSAGE);
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    pub message: String,
}

impl Default for SendOtpResponse {
    fn default() -> Self {
        Self {
            message: CODE_SENT_MESSAGE.to_string(),
        }
    }
}

/// Result of a request that passed the verification gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub status: String,
}

impl VerifyOtpResponse {
    pub fn accepted() -> Self {
        Self {
            status: "accepted".to_string(),
        }
    }
}
