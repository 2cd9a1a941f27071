use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::entities::testimonial::NewTestimonial;
use crate::errors::AppError;
use crate::repositories::content::ContentRepository;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

/// Public listing: visible testimonials only.
pub async fn list_testimonials(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let testimonials = state.store.list_testimonials(true).await?;
    Ok(HttpResponse::Ok().json(testimonials))
}

pub async fn list_testimonials_admin(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let testimonials = state.store.list_testimonials(false).await?;
    Ok(HttpResponse::Ok().json(testimonials))
}

pub async fn create_testimonial(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    payload: web::Json<NewTestimonial>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let testimonial = state.store.create_testimonial(&payload).await?;
    Ok(HttpResponse::Created().json(testimonial))
}

pub async fn update_testimonial(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    payload: web::Json<NewTestimonial>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let testimonial = state.store.update_testimonial(&id, &payload).await?;
    Ok(HttpResponse::Ok().json(testimonial))
}

pub async fn delete_testimonial(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.store.delete_testimonial(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
