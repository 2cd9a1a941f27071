use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::entities::site_content::UpdateSiteContent;
use crate::errors::AppError;
use crate::repositories::content::ContentRepository;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

/// Keyed text fragments for the brochure pages, grouped by section.
pub async fn list_site_content(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let content = state.store.list_site_content().await?;
    Ok(HttpResponse::Ok().json(content))
}

/// Rows are seeded with the schema; the admin UI only rewrites values.
pub async fn update_site_content(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    payload: web::Json<UpdateSiteContent>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let content = state.store.update_site_content(&id, &payload.value).await?;
    Ok(HttpResponse::Ok().json(content))
}
