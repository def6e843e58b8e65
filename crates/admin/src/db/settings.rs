//! Settings database operations.
//!
//! The canonical settings live in one row (`id = 1`); every save stamps
//! `updated_at` so the storefront's observable store can apply
//! last-write-wins ordering.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use fraiche_core::SiteSettings;

use super::RepositoryError;

#[derive(sqlx::FromRow)]
struct SettingsRow {
    shop_name: String,
    shop_description: String,
    logo_url: Option<String>,
    background_image: Option<String>,
    background_opacity: i32,
    background_blur: i32,
    info_content: Option<String>,
    contact_content: Option<String>,
    whatsapp_number: Option<String>,
    whatsapp_link: Option<String>,
    scrolling_text: Option<String>,
    title_style: String,
    theme_color: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    schedule: Option<String>,
    promotion_images: Json<Vec<String>>,
    updated_at: DateTime<Utc>,
}

impl From<SettingsRow> for SiteSettings {
    fn from(row: SettingsRow) -> Self {
        Self {
            shop_name: row.shop_name,
            shop_description: row.shop_description,
            logo_url: row.logo_url,
            background_image: row.background_image,
            background_opacity: row.background_opacity,
            background_blur: row.background_blur,
            info_content: row.info_content,
            contact_content: row.contact_content,
            whatsapp_number: row.whatsapp_number,
            whatsapp_link: row.whatsapp_link,
            scrolling_text: row.scrolling_text,
            title_style: row.title_style,
            theme_color: row.theme_color,
            address: row.address,
            phone: row.phone,
            email: row.email,
            schedule: row.schedule,
            promotion_images: row.promotion_images.0,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for the single-row site settings.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The saved settings, or defaults when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self) -> Result<SiteSettings, RepositoryError> {
        let row: Option<SettingsRow> = sqlx::query_as(
            r"
            SELECT shop_name, shop_description, logo_url, background_image,
                   background_opacity, background_blur, info_content, contact_content,
                   whatsapp_number, whatsapp_link, scrolling_text, title_style,
                   theme_color, address, phone, email, schedule, promotion_images,
                   updated_at
            FROM shop.site_settings
            WHERE id = 1
            ",
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(SiteSettings::from).unwrap_or_default())
    }

    /// Upsert the settings row, stamping `updated_at = NOW()`.
    ///
    /// Returns the stored snapshot with the database's timestamp.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn upsert(&self, settings: &SiteSettings) -> Result<SiteSettings, RepositoryError> {
        let row: SettingsRow = sqlx::query_as(
            r"
            INSERT INTO shop.site_settings
                (id, shop_name, shop_description, logo_url, background_image,
                 background_opacity, background_blur, info_content, contact_content,
                 whatsapp_number, whatsapp_link, scrolling_text, title_style,
                 theme_color, address, phone, email, schedule, promotion_images,
                 updated_at)
            VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, NOW())
            ON CONFLICT (id) DO UPDATE SET
                shop_name = EXCLUDED.shop_name,
                shop_description = EXCLUDED.shop_description,
                logo_url = EXCLUDED.logo_url,
                background_image = EXCLUDED.background_image,
                background_opacity = EXCLUDED.background_opacity,
                background_blur = EXCLUDED.background_blur,
                info_content = EXCLUDED.info_content,
                contact_content = EXCLUDED.contact_content,
                whatsapp_number = EXCLUDED.whatsapp_number,
                whatsapp_link = EXCLUDED.whatsapp_link,
                scrolling_text = EXCLUDED.scrolling_text,
                title_style = EXCLUDED.title_style,
                theme_color = EXCLUDED.theme_color,
                address = EXCLUDED.address,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                schedule = EXCLUDED.schedule,
                promotion_images = EXCLUDED.promotion_images,
                updated_at = NOW()
            RETURNING shop_name, shop_description, logo_url, background_image,
                      background_opacity, background_blur, info_content, contact_content,
                      whatsapp_number, whatsapp_link, scrolling_text, title_style,
                      theme_color, address, phone, email, schedule, promotion_images,
                      updated_at
            ",
        )
        .bind(&settings.shop_name)
        .bind(&settings.shop_description)
        .bind(&settings.logo_url)
        .bind(&settings.background_image)
        .bind(settings.background_opacity)
        .bind(settings.background_blur)
        .bind(&settings.info_content)
        .bind(&settings.contact_content)
        .bind(&settings.whatsapp_number)
        .bind(&settings.whatsapp_link)
        .bind(&settings.scrolling_text)
        .bind(&settings.title_style)
        .bind(&settings.theme_color)
        .bind(&settings.address)
        .bind(&settings.phone)
        .bind(&settings.email)
        .bind(&settings.schedule)
        .bind(Json(&settings.promotion_images))
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }
}
