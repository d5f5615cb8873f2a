//! Integration tests for the verification gate on POST /api/v1/otp/verify

mod common;

use actix_web::{http::StatusCode, test, App};
use serde_json::{json, Value};
use std::sync::Arc;

use otp_api::configure;

use common::{app_state, RecordingClient};

async fn post_verify(body: Value) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::new(RecordingClient::default())))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/verify")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let json: Value = test::read_body_json(resp).await;
    (status, json)
}

#[actix_web::test]
async fn test_whitespace_phone_rejected() {
    let (status, body) = post_verify(json!({"phone": "  ", "otp": "1234"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "success": false,
            "errors": [{"field": "phone", "message": "Phone number is required"}]
        })
    );
}

#[actix_web::test]
async fn test_both_fields_empty_reports_both_in_order() {
    let (status, body) = post_verify(json!({"phone": "", "otp": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], "phone");
    assert_eq!(errors[1]["field"], "otp");
    assert_eq!(errors[1]["message"], "OTP is required");
}

#[actix_web::test]
async fn test_complete_request_accepted() {
    let (status, body) = post_verify(json!({"phone": "+15551234567", "otp": "482913"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "accepted");
}

#[actix_web::test]
async fn test_missing_fields_reported_as_errors() {
    let (status, body) = post_verify(json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_null_phone_reported_as_phone_error() {
    let (status, body) = post_verify(json!({"phone": null, "otp": "482913"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "success": false,
            "errors": [{"field": "phone", "message": "Phone number is required"}]
        })
    );
}

#[actix_web::test]
async fn test_null_fields_reported_in_order() {
    let (status, body) = post_verify(json!({"phone": null, "otp": null})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], "phone");
    assert_eq!(errors[1]["field"], "otp");
}

#[actix_web::test]
async fn test_numeric_otp_accepted() {
    let (status, body) = post_verify(json!({"phone": "+15551234567", "otp": 482913})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "accepted");
}

#[actix_web::test]
async fn test_malformed_json_rejected_as_body_error() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::new(RecordingClient::default())))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/verify")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"phone\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"][0]["field"], "body");
}
