use actix_web::{http::header, web, HttpRequest, HttpResponse};

use crate::constants::CONTACT_SUCCESS_MESSAGE;
use crate::domain::validate::RawContactForm;
use crate::errors::AppError;
use crate::infrastructure::limiter::rate_limiter::RateDecision;
use crate::infrastructure::utils::get_client_ip::get_client_ip;
use crate::AppState;

/// `POST /api/contact`. Order matters: the rate check runs before anything
/// touches the body, then the content-type gate, then the intake pipeline.
pub async fn submit_contact(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let client_key = get_client_ip(&req, state.trust_x_forwarded_for);
    if state.limiter.check(&client_key) == RateDecision::Limited {
        tracing::warn!(client = %client_key, "contact form rate limit hit");
        return Err(AppError::RateLimited);
    }

    require_json_content_type(&req)?;

    // A body that is not JSON at all lands in the catch-all 500, matching
    // the closed error table; field-shape problems get their own 400s.
    let value: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(format!("unparseable contact body: {}", e)))?;
    // Valid JSON that is not an object (a string, an array) carries no
    // fields, so it gets the same 400 as an object missing them.
    let raw: RawContactForm =
        serde_json::from_value(value).map_err(|_| AppError::MissingRequiredField)?;

    let _stored = state.contact_handler.handle(raw).await?;

    // No identifiers or storage details leak to the visitor.
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": CONTACT_SUCCESS_MESSAGE
    })))
}

pub fn require_json_content_type(req: &HttpRequest) -> Result<(), AppError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if content_type.contains("application/json") {
        Ok(())
    } else {
        Err(AppError::InvalidContentType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn accepts_json_content_type_with_charset() {
        let req = TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "application/json; charset=utf-8"))
            .to_http_request();
        assert!(require_json_content_type(&req).is_ok());
    }

    #[test]
    fn rejects_other_content_types() {
        for ct in ["text/plain", "application/x-www-form-urlencoded", "text/html"] {
            let req = TestRequest::default()
                .insert_header((header::CONTENT_TYPE, ct))
                .to_http_request();
            assert!(matches!(
                require_json_content_type(&req),
                Err(AppError::InvalidContentType)
            ));
        }
    }

    #[test]
    fn rejects_missing_content_type() {
        let req = TestRequest::default().to_http_request();
        assert!(matches!(
            require_json_content_type(&req),
            Err(AppError::InvalidContentType)
        ));
    }
}
