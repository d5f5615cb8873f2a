use actix_web::{HttpRequest, HttpResponse};

use otp_shared::phone::mask_phone_number;
use otp_shared::types::ApiResponse;

use crate::dto::VerifyOtpResponse;
use crate::handlers::error::request_id;
use crate::middleware::ValidatedVerification;

/// Handler for POST /api/v1/otp/verify
///
/// Only runs for requests that passed the gate. Code comparison happens in
/// the verification store downstream; this endpoint acknowledges acceptance.
pub async fn verify_otp(req: HttpRequest, request: ValidatedVerification) -> HttpResponse {
    let request_id = request_id(&req);

    tracing::info!(
        request_id = %request_id,
        phone = %mask_phone_number(&request.phone),
        event = "verification_accepted",
        "Verification request accepted"
    );

    HttpResponse::Ok()
        .json(ApiResponse::success(VerifyOtpResponse::accepted()).with_request_id(request_id))
}
