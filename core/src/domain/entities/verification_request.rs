//! Inbound OTP verification request and its field checks.

use serde::{Deserialize, Serialize};

use otp_shared::validation::{lenient, validators, Validate, ValidationErrors};

pub const PHONE_FIELD: &str = "phone";
pub const OTP_FIELD: &str = "otp";

pub const PHONE_REQUIRED_MESSAGE: &str = "Phone number is required";
pub const OTP_REQUIRED_MESSAGE: &str = "OTP is required";

/// Payload submitted to the verification endpoint
///
/// Absent and `null` fields deserialize as empty strings so the gate reports
/// them as field errors instead of failing on the JSON shape. Numeric values
/// are kept as their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub otp: String,
}

impl VerificationRequest {
    pub fn new(phone: impl Into<String>, otp: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            otp: otp.into(),
        }
    }
}

impl Validate for VerificationRequest {
    /// Runs every check and returns all failures in field order
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !validators::not_blank(&self.phone) {
            errors.add_error(PHONE_FIELD, PHONE_REQUIRED_MESSAGE);
        }
        if !validators::not_blank(&self.otp) {
            errors.add_error(OTP_FIELD, OTP_REQUIRED_MESSAGE);
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(errors: &ValidationErrors) -> Vec<&str> {
        errors.errors().iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_whitespace_phone_is_rejected_alone() {
        let request = VerificationRequest::new("  ", "1234");
        let errors = request.validate().unwrap_err();

        assert_eq!(fields(&errors), vec![PHONE_FIELD]);
        assert_eq!(errors.errors()[0].message, PHONE_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_both_empty_reports_both_fields() {
        let request = VerificationRequest::new("", "");
        let errors = request.validate().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(fields(&errors), vec![PHONE_FIELD, OTP_FIELD]);
    }

    #[test]
    fn test_blank_otp_is_rejected_alone() {
        let request = VerificationRequest::new("+15551234567", "\t ");
        let errors = request.validate().unwrap_err();

        assert_eq!(fields(&errors), vec![OTP_FIELD]);
        assert_eq!(errors.errors()[0].message, OTP_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_complete_request_is_accepted() {
        let request = VerificationRequest::new("+15551234567", "482913");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validation_does_not_mutate_request() {
        let request = VerificationRequest::new("  +15551234567  ", " 482913 ");
        assert!(request.validate().is_ok());
        assert_eq!(request.phone, "  +15551234567  ");
        assert_eq!(request.otp, " 482913 ");
    }

    #[test]
    fn test_missing_json_fields_default_to_empty() {
        let request: VerificationRequest = serde_json::from_str(r#"{"otp": "482913"}"#).unwrap();
        assert_eq!(request.phone, "");

        let errors = request.validate().unwrap_err();
        assert_eq!(fields(&errors), vec![PHONE_FIELD]);
    }

    #[test]
    fn test_null_field_reported_as_that_field() {
        let request: VerificationRequest =
            serde_json::from_str(r#"{"phone": null, "otp": "482913"}"#).unwrap();

        let errors = request.validate().unwrap_err();
        assert_eq!(fields(&errors), vec![PHONE_FIELD]);
        assert_eq!(errors.errors()[0].message, PHONE_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_numeric_otp_kept_as_text() {
        let request: VerificationRequest =
            serde_json::from_str(r#"{"phone": "+15551234567", "otp": 482913}"#).unwrap();

        assert_eq!(request.otp, "482913");
        assert!(request.validate().is_ok());
    }
}
