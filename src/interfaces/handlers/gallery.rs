use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::entities::gallery_image::NewGalleryImage;
use crate::errors::AppError;
use crate::repositories::content::ContentRepository;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

/// Public gallery: visible images only.
pub async fn list_gallery(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let images = state.store.list_gallery_images(true).await?;
    Ok(HttpResponse::Ok().json(images))
}

/// Admin gallery: every image, hidden ones included.
pub async fn list_gallery_admin(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let images = state.store.list_gallery_images(false).await?;
    Ok(HttpResponse::Ok().json(images))
}

pub async fn create_gallery_image(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    payload: web::Json<NewGalleryImage>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let image = state.store.create_gallery_image(&payload).await?;
    Ok(HttpResponse::Created().json(image))
}

pub async fn update_gallery_image(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    payload: web::Json<NewGalleryImage>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let image = state.store.update_gallery_image(&id, &payload).await?;
    Ok(HttpResponse::Ok().json(image))
}

pub async fn delete_gallery_image(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.store.delete_gallery_image(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
