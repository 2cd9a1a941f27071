use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon_name: String,
    pub hero_image: String,
    pub content_image: String,
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewService {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    #[validate(length(max = 50))]
    #[serde(default)]
    pub icon_name: String,

    #[validate(length(max = 500))]
    #[serde(default)]
    pub hero_image: String,

    #[validate(length(max = 500))]
    #[serde(default)]
    pub content_image: String,

    #[serde(default)]
    pub sort_order: i32,
}
