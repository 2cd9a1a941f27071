use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::gallery_image::{GalleryImage, NewGalleryImage};
use crate::entities::service::{NewService, Service};
use crate::entities::site_content::SiteContent;
use crate::entities::submission::{
    NewSubmission, ReadFilter, Submission, SubmissionListResponse, SubmissionQuery,
};
use crate::entities::testimonial::{NewTestimonial, Testimonial};
use crate::errors::AppError;
use crate::repositories::content::ContentRepository;
use crate::repositories::submissions::SubmissionStore;

const SUBMISSION_COLUMNS: &str = "id, name, email, phone, message, is_read, submitted_at";

#[derive(Clone)]
pub struct SqlxRepo {
    pool: PgPool,
}

impl SqlxRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxRepo { pool }
    }

    pub async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl SubmissionStore for SqlxRepo {
    async fn save(&self, new: &NewSubmission) -> Result<Submission, AppError> {
        let submission = sqlx::query_as::<_, Submission>(&format!(
            "INSERT INTO contact_submissions (name, email, phone, message) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {SUBMISSION_COLUMNS}"
        ))
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(submission)
    }

    async fn list(&self, query: &SubmissionQuery) -> Result<SubmissionListResponse, AppError> {
        let search = query
            .search
            .as_deref()
            .map(|s| format!("%{}%", s.trim()))
            .unwrap_or_else(|| "%".to_string());

        let read_filter: Option<bool> = match query.filter {
            ReadFilter::All => None,
            ReadFilter::Read => Some(true),
            ReadFilter::Unread => Some(false),
        };

        let submissions = sqlx::query_as::<_, Submission>(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM contact_submissions \
             WHERE (name ILIKE $1 OR email ILIKE $1 OR message ILIKE $1) \
               AND ($2::bool IS NULL OR is_read = $2) \
             ORDER BY submitted_at DESC"
        ))
        .bind(&search)
        .bind(read_filter)
        .fetch_all(&self.pool)
        .await?;

        let (total, unread) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE NOT is_read) FROM contact_submissions",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(SubmissionListResponse {
            submissions,
            total,
            unread,
        })
    }

    async fn toggle_read(&self, id: &Uuid) -> Result<Submission, AppError> {
        sqlx::query_as::<_, Submission>(&format!(
            "UPDATE contact_submissions SET is_read = NOT is_read \
             WHERE id = $1 \
             RETURNING {SUBMISSION_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Submission not found".into()))
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            Err(AppError::NotFound("Submission not found".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ContentRepository for SqlxRepo {
    async fn list_services(&self) -> Result<Vec<Service>, AppError> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT id, title, description, icon_name, hero_image, content_image, sort_order \
             FROM services ORDER BY sort_order",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    async fn create_service(&self, new: &NewService) -> Result<Service, AppError> {
        let service = sqlx::query_as::<_, Service>(
            "INSERT INTO services (title, description, icon_name, hero_image, content_image, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, title, description, icon_name, hero_image, content_image, sort_order",
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.icon_name)
        .bind(&new.hero_image)
        .bind(&new.content_image)
        .bind(new.sort_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(service)
    }

    async fn update_service(&self, id: &Uuid, update: &NewService) -> Result<Service, AppError> {
        sqlx::query_as::<_, Service>(
            "UPDATE services \
             SET title = $2, description = $3, icon_name = $4, hero_image = $5, \
                 content_image = $6, sort_order = $7 \
             WHERE id = $1 \
             RETURNING id, title, description, icon_name, hero_image, content_image, sort_order",
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.description)
        .bind(&update.icon_name)
        .bind(&update.hero_image)
        .bind(&update.content_image)
        .bind(update.sort_order)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".into()))
    }

    async fn delete_service(&self, id: &Uuid) -> Result<(), AppError> {
        delete_by_id(&self.pool, "services", id, "Service not found").await
    }

    async fn list_gallery_images(&self, visible_only: bool) -> Result<Vec<GalleryImage>, AppError> {
        let images = sqlx::query_as::<_, GalleryImage>(
            "SELECT id, src, alt, sort_order, is_visible FROM gallery_images \
             WHERE (NOT $1 OR is_visible) ORDER BY sort_order",
        )
        .bind(visible_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }

    async fn create_gallery_image(&self, new: &NewGalleryImage) -> Result<GalleryImage, AppError> {
        let image = sqlx::query_as::<_, GalleryImage>(
            "INSERT INTO gallery_images (src, alt, sort_order, is_visible) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, src, alt, sort_order, is_visible",
        )
        .bind(&new.src)
        .bind(&new.alt)
        .bind(new.sort_order)
        .bind(new.is_visible)
        .fetch_one(&self.pool)
        .await?;

        Ok(image)
    }

    async fn update_gallery_image(
        &self,
        id: &Uuid,
        update: &NewGalleryImage,
    ) -> Result<GalleryImage, AppError> {
        sqlx::query_as::<_, GalleryImage>(
            "UPDATE gallery_images \
             SET src = $2, alt = $3, sort_order = $4, is_visible = $5 \
             WHERE id = $1 \
             RETURNING id, src, alt, sort_order, is_visible",
        )
        .bind(id)
        .bind(&update.src)
        .bind(&update.alt)
        .bind(update.sort_order)
        .bind(update.is_visible)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Gallery image not found".into()))
    }

    async fn delete_gallery_image(&self, id: &Uuid) -> Result<(), AppError> {
        delete_by_id(&self.pool, "gallery_images", id, "Gallery image not found").await
    }

    async fn list_testimonials(&self, visible_only: bool) -> Result<Vec<Testimonial>, AppError> {
        let testimonials = sqlx::query_as::<_, Testimonial>(
            "SELECT id, name, text, avatar_url, sort_order, is_visible FROM testimonials \
             WHERE (NOT $1 OR is_visible) ORDER BY sort_order",
        )
        .bind(visible_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(testimonials)
    }

    async fn create_testimonial(&self, new: &NewTestimonial) -> Result<Testimonial, AppError> {
        let testimonial = sqlx::query_as::<_, Testimonial>(
            "INSERT INTO testimonials (name, text, avatar_url, sort_order, is_visible) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, text, avatar_url, sort_order, is_visible",
        )
        .bind(&new.name)
        .bind(&new.text)
        .bind(&new.avatar_url)
        .bind(new.sort_order)
        .bind(new.is_visible)
        .fetch_one(&self.pool)
        .await?;

        Ok(testimonial)
    }

    async fn update_testimonial(
        &self,
        id: &Uuid,
        update: &NewTestimonial,
    ) -> Result<Testimonial, AppError> {
        sqlx::query_as::<_, Testimonial>(
            "UPDATE testimonials \
             SET name = $2, text = $3, avatar_url = $4, sort_order = $5, is_visible = $6 \
             WHERE id = $1 \
             RETURNING id, name, text, avatar_url, sort_order, is_visible",
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.text)
        .bind(&update.avatar_url)
        .bind(update.sort_order)
        .bind(update.is_visible)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Testimonial not found".into()))
    }

    async fn delete_testimonial(&self, id: &Uuid) -> Result<(), AppError> {
        delete_by_id(&self.pool, "testimonials", id, "Testimonial not found").await
    }

    async fn list_site_content(&self) -> Result<Vec<SiteContent>, AppError> {
        let content = sqlx::query_as::<_, SiteContent>(
            "SELECT id, section, key, value, updated_at FROM site_content \
             ORDER BY section, key",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(content)
    }

    async fn update_site_content(&self, id: &Uuid, value: &str) -> Result<SiteContent, AppError> {
        sqlx::query_as::<_, SiteContent>(
            "UPDATE site_content SET value = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING id, section, key, value, updated_at",
        )
        .bind(id)
        .bind(value)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Content entry not found".into()))
    }
}

async fn delete_by_id(
    pool: &PgPool,
    table: &str,
    id: &Uuid,
    not_found: &str,
) -> Result<(), AppError> {
    let result = sqlx::query(&format!("DELETE FROM {table} WHERE id = $1"))
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        Err(AppError::NotFound(not_found.into()))
    } else {
        Ok(())
    }
}
