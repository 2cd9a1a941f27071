use actix_web::{web, HttpResponse};

use crate::entities::token::LoginRequest;
use crate::errors::AuthError;
use crate::AppState;

/// `POST /auth/login` for the back-office operator.
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AuthError> {
    let response = state.auth_handler.login(payload.into_inner())?;
    Ok(HttpResponse::Ok().json(response))
}
