//! Site content and settings reads.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use fraiche_core::{
    FooterContent, FooterContentId, FooterLink, FooterSection, SiteSettings, SocialLink,
};

use super::RepositoryError;

/// Repository for storefront content reads.
pub struct ContentRepository<'a> {
    pool: &'a PgPool,
}

#[derive(sqlx::FromRow)]
struct FooterRow {
    id: FooterContentId,
    section: String,
    title: String,
    content: String,
    links: Json<Vec<FooterLink>>,
    is_active: bool,
    position: i32,
}

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

impl<'a> ContentRepository<'a> {
    /// Create a new content repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Active social links in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_social_links(&self) -> Result<Vec<SocialLink>, RepositoryError> {
        let links = sqlx::query_as(
            r"
            SELECT id, platform, name, url, icon, is_active, position
            FROM shop.social_links
            WHERE is_active = TRUE
            ORDER BY position, id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(links)
    }

    /// Active footer content, optionally restricted to one section,
    /// ordered by section then position.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` on an unknown section slug.
    pub async fn list_footer_contents(
        &self,
        section: Option<FooterSection>,
    ) -> Result<Vec<FooterContent>, RepositoryError> {
        let rows: Vec<FooterRow> = match section {
            Some(section) => {
                sqlx::query_as(
                    r"
                    SELECT id, section, title, content, links, is_active, position
                    FROM shop.footer_contents
                    WHERE is_active = TRUE AND section = $1
                    ORDER BY position, id
                    ",
                )
                .bind(section.as_str())
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    r"
                    SELECT id, section, title, content, links, is_active, position
                    FROM shop.footer_contents
                    WHERE is_active = TRUE
                    ORDER BY section, position, id
                    ",
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        rows.into_iter()
            .map(|row| {
                let section = FooterSection::parse(&row.section).ok_or_else(|| {
                    RepositoryError::DataCorruption(format!(
                        "unknown footer section in database: {}",
                        row.section
                    ))
                })?;
                Ok(FooterContent {
                    id: row.id,
                    section,
                    title: row.title,
                    content: row.content,
                    links: row.links.0,
                    is_active: row.is_active,
                    position: row.position,
                })
            })
            .collect()
    }

    /// The canonical settings row, or defaults when none has been saved.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn load_settings(&self) -> Result<SiteSettings, RepositoryError> {
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
}
