//! Contract tests for the pieces of the public surface that do not need a
//! database: the closed set of error bodies, the content-type gate, the
//! sanitizer, and the contact-form rate limit.

use actix_web::{body::to_bytes, error::ResponseError, http::StatusCode, test::TestRequest};
use std::time::Duration;

use fineline_backend::errors::AppError;
use fineline_backend::handlers::contact::require_json_content_type;
use fineline_backend::limiter::rate_limiter::{FixedWindowLimiter, RateDecision};
use fineline_backend::sanitize::sanitize;

async fn error_body(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.error_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[actix_web::test]
async fn error_responses_match_the_wire_contract() {
    let cases = [
        (
            AppError::RateLimited,
            StatusCode::TOO_MANY_REQUESTS,
            "Too many requests. Please try again in a minute.",
        ),
        (
            AppError::InvalidContentType,
            StatusCode::BAD_REQUEST,
            "Invalid content type.",
        ),
        (
            AppError::MissingRequiredField,
            StatusCode::BAD_REQUEST,
            "Name, email, and message are required and must be text.",
        ),
        (
            AppError::InvalidEmail,
            StatusCode::BAD_REQUEST,
            "Please provide a valid email address.",
        ),
        (
            AppError::InvalidPhone,
            StatusCode::BAD_REQUEST,
            "Please provide a valid phone number.",
        ),
        (
            AppError::EmptyAfterSanitization,
            StatusCode::BAD_REQUEST,
            "Please provide valid input without HTML tags.",
        ),
    ];

    for (err, expected_status, expected_message) in cases {
        let (status, body) = error_body(err).await;
        assert_eq!(status, expected_status);
        assert_eq!(body["error"], expected_message);
    }
}

#[actix_web::test]
async fn internal_errors_never_disclose_their_cause() {
    let secret_cause = "connection to db-internal-host:5432 refused";
    for err in [
        AppError::Storage(secret_cause.to_string()),
        AppError::Internal(secret_cause.to_string()),
    ] {
        let (status, body) = error_body(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Something went wrong. Please try again.");
        assert!(!body.to_string().contains("db-internal-host"));
    }
}

#[actix_web::test]
async fn contact_endpoint_requires_json_content_type() {
    let req = TestRequest::post()
        .insert_header(("content-type", "text/plain"))
        .to_http_request();
    let err = require_json_content_type(&req).unwrap_err();
    let (status, body) = error_body(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid content type.");

    let req = TestRequest::post()
        .insert_header(("content-type", "application/json"))
        .to_http_request();
    assert!(require_json_content_type(&req).is_ok());
}

#[test]
fn sixth_request_in_a_window_is_limited() {
    let limiter = FixedWindowLimiter::new(5, Duration::from_secs(60));
    for _ in 0..5 {
        assert_eq!(limiter.check("198.51.100.23"), RateDecision::Allowed);
    }
    assert_eq!(limiter.check("198.51.100.23"), RateDecision::Limited);
    // a different visitor is unaffected
    assert_eq!(limiter.check("198.51.100.24"), RateDecision::Allowed);
}

#[test]
fn limited_client_is_allowed_again_after_the_window() {
    let limiter = FixedWindowLimiter::new(2, Duration::from_millis(40));
    assert_eq!(limiter.check("k"), RateDecision::Allowed);
    assert_eq!(limiter.check("k"), RateDecision::Allowed);
    assert_eq!(limiter.check("k"), RateDecision::Limited);

    std::thread::sleep(Duration::from_millis(60));
    assert_eq!(limiter.check("k"), RateDecision::Allowed);
}

#[test]
fn success_message_is_the_published_thank_you_text() {
    assert_eq!(
        fineline_backend::constants::CONTACT_SUCCESS_MESSAGE,
        "Thank you for contacting Fine Line Auto Body. We will get back to you shortly!"
    );
}

#[test]
fn sanitizer_strips_markup_and_is_idempotent() {
    let once = sanitize("<script>alert(1)</script>hello", 2000);
    assert_eq!(once, "alert(1)hello");
    assert_eq!(sanitize(&once, 2000), once);
}
