use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::entities::service::NewService;
use crate::errors::AppError;
use crate::repositories::content::ContentRepository;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

/// Public listing for the services page, ordered for display.
pub async fn list_services(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let services = state.store.list_services().await?;
    Ok(HttpResponse::Ok().json(services))
}

pub async fn create_service(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    payload: web::Json<NewService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let service = state.store.create_service(&payload).await?;
    Ok(HttpResponse::Created().json(service))
}

pub async fn update_service(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    payload: web::Json<NewService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let service = state.store.update_service(&id, &payload).await?;
    Ok(HttpResponse::Ok().json(service))
}

pub async fn delete_service(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.store.delete_service(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
