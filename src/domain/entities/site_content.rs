use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One keyed text fragment rendered somewhere on the brochure site
/// (hours, address, hero copy, and so on). Rows are seeded with the
/// schema; the admin API only updates values.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SiteContent {
    pub id: Uuid,
    pub section: String,
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSiteContent {
    #[validate(length(max = 5000))]
    pub value: String,
}
