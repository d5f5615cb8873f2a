//! Domain entities representing core business objects.

pub mod one_time_password;
pub mod verification_request;


// Re-export commonly used types
pub use one_time_password::{OneTimePassword, CODE_LENGTH, MAX_CODE, MIN_CODE};
pub use verification_request::{
    VerificationRequest, OTP_FIELD, OTP_REQUIRED_MESSAGE, PHONE_FIELD, PHONE_REQUIRED_MESSAGE,
};
