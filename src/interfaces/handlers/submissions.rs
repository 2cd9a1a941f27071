use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::entities::submission::SubmissionQuery;
use crate::errors::AppError;
use crate::repositories::submissions::SubmissionStore;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

/// `GET /admin/submissions?search=&filter=all|unread|read`, newest first.
pub async fn list_submissions(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    query: web::Query<SubmissionQuery>,
) -> Result<HttpResponse, AppError> {
    let response = state.store.list(&query).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// `PATCH /admin/submissions/{id}/read` flips the read flag.
pub async fn toggle_submission_read(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let submission = state.store.toggle_read(&id).await?;
    Ok(HttpResponse::Ok().json(submission))
}

/// `DELETE /admin/submissions/{id}`.
pub async fn delete_submission(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.store.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
