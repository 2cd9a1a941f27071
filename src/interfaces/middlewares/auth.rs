use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{
    rc::Rc,
    task::{Context, Poll},
};

use crate::{errors::AuthError, AppState};

/// Guards the `/admin` scope with a bearer token; everything else on this
/// service is public by design (brochure reads, the contact form, login).
pub struct AuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if !is_protected_route(req.path(), req.method().as_str()) {
                return service.call(req).await;
            }

            let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
                tracing::error!("AppState missing in middleware");
                AuthError::TokenCreation
            })?;

            let Some(token) = extract_token(&req) else {
                tracing::warn!("Missing or malformed Authorization header");
                return Ok(unauthorized_response(req, "Missing or invalid credentials"));
            };

            let claims = match state.auth_handler.jwt_service().decode_jwt(&token) {
                Ok(data) => data.claims,
                Err(AuthError::TokenExpired) => {
                    return Ok(unauthorized_response(req, "Token has expired"));
                }
                Err(_) => {
                    return Ok(unauthorized_response(req, "Missing or invalid credentials"));
                }
            };

            if !claims.admin {
                let response = HttpResponse::Forbidden()
                    .json(serde_json::json!({"error": "Admin access required"}));
                return Ok(custom_error_response(req, response));
            }

            req.extensions_mut().insert(claims);
            service.call(req).await
        })
    }
}

fn is_protected_route(path: &str, method: &str) -> bool {
    if method == "OPTIONS" {
        return false;
    }
    path == "/admin" || path.starts_with("/admin/")
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn unauthorized_response(req: ServiceRequest, message: &str) -> ServiceResponse<BoxBody> {
    let response = HttpResponse::Unauthorized().json(serde_json::json!({ "error": message }));
    custom_error_response(req, response)
}

fn custom_error_response(req: ServiceRequest, response: HttpResponse) -> ServiceResponse<BoxBody> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admin_paths_are_protected() {
        assert!(is_protected_route("/admin/submissions", "GET"));
        assert!(is_protected_route("/admin", "DELETE"));
        assert!(!is_protected_route("/admin/submissions", "OPTIONS"));
        assert!(!is_protected_route("/api/contact", "POST"));
        assert!(!is_protected_route("/api/services", "GET"));
        assert!(!is_protected_route("/auth/login", "POST"));
        assert!(!is_protected_route("/administrator", "GET"));
        assert!(!is_protected_route("/", "GET"));
    }
}
