//! Verification request gate
//!
//! [`ValidatedJson`] deserializes a JSON body and runs its [`Validate`] checks
//! before the handler is called. Every check runs, so a rejected request
//! reports all failing fields at once:
//!
//! ```json
//! { "success": false, "errors": [ { "field": "phone", "message": "Phone number is required" } ] }
//! ```
//!
//! A body that is not JSON at all is rejected the same way, with the single
//! field `body`.

use actix_web::{dev::Payload, web, Error, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use std::ops::Deref;

use otp_core::domain::VerificationRequest;
use otp_shared::validation::{Validate, ValidationErrors};

use crate::handlers::error::RejectedRequest;

/// Field name used when the body itself cannot be parsed
pub const BODY_FIELD: &str = "body";

pub const MALFORMED_BODY_MESSAGE: &str = "Request body must be a valid JSON object";

/// A JSON body that passed its field checks
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

/// The gate in front of OTP verification
pub type ValidatedVerification = ValidatedJson<VerificationRequest>;

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = web::Json::<T>::from_request(req, payload);
        let path = req.path().to_string();

        Box::pin(async move {
            let value = match json.await {
                Ok(json) => json.into_inner(),
                Err(e) => {
                    tracing::debug!(path = %path, error = %e, "Unparseable request body");
                    let mut errors = ValidationErrors::new();
                    errors.add_error(BODY_FIELD, MALFORMED_BODY_MESSAGE);
                    return Err(RejectedRequest(errors).into());
                }
            };

            if let Err(errors) = value.validate() {
                let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
                tracing::warn!(
                    path = %path,
                    fields = ?fields,
                    event = "request_rejected",
                    "Request failed field validation"
                );
                return Err(RejectedRequest(errors).into());
            }

            Ok(ValidatedJson(value))
        })
    }
}
