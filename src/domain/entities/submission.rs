use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored contact-form entry. Content fields are immutable after
/// creation; only the read flag changes.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub is_read: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Sanitized fields ready for persistence. `phone` is empty when the
/// visitor left it out, matching the stored column.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadFilter {
    #[default]
    All,
    Unread,
    Read,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmissionQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub filter: ReadFilter,
}

#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub submissions: Vec<Submission>,
    pub total: i64,
    pub unread: i64,
}
