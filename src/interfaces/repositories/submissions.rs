use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::submission::{
    NewSubmission, Submission, SubmissionListResponse, SubmissionQuery,
};
use crate::errors::AppError;

/// Persistence contract for contact submissions. `save` must fail closed:
/// an error here aborts the request before any success response. Swapping
/// the backing store (the legacy deployment appended to a local JSON file)
/// means providing another implementation of this trait.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn save(&self, new: &NewSubmission) -> Result<Submission, AppError>;
    async fn list(&self, query: &SubmissionQuery) -> Result<SubmissionListResponse, AppError>;
    async fn toggle_read(&self, id: &Uuid) -> Result<Submission, AppError>;
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
}
