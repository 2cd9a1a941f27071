use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::gallery_image::{GalleryImage, NewGalleryImage};
use crate::entities::service::{NewService, Service};
use crate::entities::site_content::SiteContent;
use crate::entities::testimonial::{NewTestimonial, Testimonial};
use crate::errors::AppError;

/// CRUD contract over the brochure-site tables. Public listings return
/// only visible rows; the admin listings return everything.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn list_services(&self) -> Result<Vec<Service>, AppError>;
    async fn create_service(&self, new: &NewService) -> Result<Service, AppError>;
    async fn update_service(&self, id: &Uuid, update: &NewService) -> Result<Service, AppError>;
    async fn delete_service(&self, id: &Uuid) -> Result<(), AppError>;

    async fn list_gallery_images(&self, visible_only: bool) -> Result<Vec<GalleryImage>, AppError>;
    async fn create_gallery_image(&self, new: &NewGalleryImage) -> Result<GalleryImage, AppError>;
    async fn update_gallery_image(
        &self,
        id: &Uuid,
        update: &NewGalleryImage,
    ) -> Result<GalleryImage, AppError>;
    async fn delete_gallery_image(&self, id: &Uuid) -> Result<(), AppError>;

    async fn list_testimonials(&self, visible_only: bool) -> Result<Vec<Testimonial>, AppError>;
    async fn create_testimonial(&self, new: &NewTestimonial) -> Result<Testimonial, AppError>;
    async fn update_testimonial(
        &self,
        id: &Uuid,
        update: &NewTestimonial,
    ) -> Result<Testimonial, AppError>;
    async fn delete_testimonial(&self, id: &Uuid) -> Result<(), AppError>;

    async fn list_site_content(&self) -> Result<Vec<SiteContent>, AppError>;
    async fn update_site_content(&self, id: &Uuid, value: &str) -> Result<SiteContent, AppError>;
}
