use actix_web::{web, HttpRequest, HttpResponse};

use otp_shared::phone::mask_phone_number;
use otp_shared::types::ApiResponse;

use crate::dto::{SendOtpRequest, SendOtpResponse};
use crate::handlers::error::{handle_domain_error, request_id};
use crate::middleware::ValidatedJson;

use super::AppState;

/// Handler for POST /api/v1/otp/send
///
/// # Request Body
///
/// ```json
/// { "phone": "+15551234567" }
/// ```
///
/// # Responses
///
/// - 200 `{ "success": true, "data": { "message": "Verification code sent" } }`
/// - 400 field errors when `phone` is blank
/// - 503 `{ "success": false, "error": "Failed to send verification code" }`
pub async fn send_otp(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: ValidatedJson<SendOtpRequest>,
) -> HttpResponse {
    let request_id = request_id(&req);
    let phone = request.into_inner().phone;

    tracing::info!(
        request_id = %request_id,
        phone = %mask_phone_number(&phone),
        "Processing send_otp request"
    );

    // Storing the issued code for later comparison happens outside this service.
    match state.issuer.issue(&phone).await {
        Ok(_) => HttpResponse::Ok()
            .json(ApiResponse::success(SendOtpResponse::default()).with_request_id(request_id)),
        Err(e) => handle_domain_error(&e, &request_id),
    }
}
