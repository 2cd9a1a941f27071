use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub text: String,
    pub avatar_url: String,
    pub sort_order: i32,
    pub is_visible: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewTestimonial {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 2000))]
    pub text: String,

    #[validate(length(max = 500))]
    #[serde(default)]
    pub avatar_url: String,

    #[serde(default)]
    pub sort_order: i32,

    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}
