//! Route table and application-level handlers

use actix_web::{web, HttpResponse};
use chrono::Utc;

use otp_shared::types::{HealthResponse, HealthStatus};

use crate::routes::otp::{send_otp::send_otp, verify_otp::verify_otp};

pub const SERVICE_NAME: &str = "otp-gate-api";

/// Register all routes
///
/// Callers provide `web::Data<AppState>` and wrap the app with their
/// middleware of choice (the binary uses `TracingLogger`).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/otp")
                    .route("/send", web::post().to(send_otp))
                    .route("/verify", web::post().to(verify_otp)),
            ),
        )
        .default_service(web::route().to(not_found));
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: HealthStatus::Healthy,
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "error": "The requested resource was not found"
    }))
}
