use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct GalleryImage {
    pub id: Uuid,
    pub src: String,
    pub alt: String,
    pub sort_order: i32,
    pub is_visible: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewGalleryImage {
    #[validate(length(min = 1, max = 500))]
    pub src: String,

    #[validate(length(max = 200))]
    #[serde(default)]
    pub alt: String,

    #[serde(default)]
    pub sort_order: i32,

    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}
