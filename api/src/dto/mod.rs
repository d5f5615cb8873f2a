pub mod otp;

pub use otp::{SendOtpRequest, SendOtpResponse, VerifyOtpResponse, CODE_SENT_MESSAGE};
pub use otp_core::domain::VerificationRequest;
