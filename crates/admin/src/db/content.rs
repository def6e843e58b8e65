//! Site content repository: social links and footer blocks.

use sqlx::PgPool;
use sqlx::types::Json;

use fraiche_core::{
    FooterContent, FooterContentId, FooterLink, FooterSection, SocialLink, SocialLinkId,
};

use super::RepositoryError;

/// Input for social link creation and update.
#[derive(Debug, Clone)]
pub struct NewSocialLink {
    pub platform: String,
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
    pub is_active: bool,
    pub position: i32,
}

/// Input for footer content creation and update.
#[derive(Debug, Clone)]
pub struct NewFooterContent {
    pub section: FooterSection,
    pub title: String,
    pub content: String,
    pub links: Vec<FooterLink>,
    pub is_active: bool,
    pub position: i32,
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

impl FooterRow {
    fn into_content(self) -> Result<FooterContent, RepositoryError> {
        let section = FooterSection::parse(&self.section).ok_or_else(|| {
            RepositoryError::DataCorruption(format!(
                "unknown footer section in database: {}",
                self.section
            ))
        })?;
        Ok(FooterContent {
            id: self.id,
            section,
            title: self.title,
            content: self.content,
            links: self.links.0,
            is_active: self.is_active,
            position: self.position,
        })
    }
}

/// Repository for admin content operations.
pub struct ContentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContentRepository<'a> {
    /// Create a new content repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Social links
    // =========================================================================

    /// All social links in display order, active or not.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_social_links(&self) -> Result<Vec<SocialLink>, RepositoryError> {
        let links = sqlx::query_as(
            r"
            SELECT id, platform, name, url, icon, is_active, position
            FROM shop.social_links
            ORDER BY position, id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(links)
    }

    /// Create a social link.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create_social_link(
        &self,
        input: NewSocialLink,
    ) -> Result<SocialLink, RepositoryError> {
        let link = sqlx::query_as(
            r"
            INSERT INTO shop.social_links (platform, name, url, icon, is_active, position)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, platform, name, url, icon, is_active, position
            ",
        )
        .bind(&input.platform)
        .bind(&input.name)
        .bind(&input.url)
        .bind(&input.icon)
        .bind(input.is_active)
        .bind(input.position)
        .fetch_one(self.pool)
        .await?;

        Ok(link)
    }

    /// Update a social link. Returns `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update_social_link(
        &self,
        id: SocialLinkId,
        input: NewSocialLink,
    ) -> Result<Option<SocialLink>, RepositoryError> {
        let link = sqlx::query_as(
            r"
            UPDATE shop.social_links
            SET platform = $2, name = $3, url = $4, icon = $5, is_active = $6, position = $7
            WHERE id = $1
            RETURNING id, platform, name, url, icon, is_active, position
            ",
        )
        .bind(id)
        .bind(&input.platform)
        .bind(&input.name)
        .bind(&input.url)
        .bind(&input.icon)
        .bind(input.is_active)
        .bind(input.position)
        .fetch_optional(self.pool)
        .await?;

        Ok(link)
    }

    /// Delete a social link. Returns whether a row existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_social_link(&self, id: SocialLinkId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.social_links WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // =========================================================================
    // Footer content
    // =========================================================================

    /// All footer content ordered by section then position, active or not.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` on an unknown section slug.
    pub async fn list_footer_contents(&self) -> Result<Vec<FooterContent>, RepositoryError> {
        let rows: Vec<FooterRow> = sqlx::query_as(
            r"
            SELECT id, section, title, content, links, is_active, position
            FROM shop.footer_contents
            ORDER BY section, position, id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(FooterRow::into_content).collect()
    }

    /// Create a footer content block.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create_footer_content(
        &self,
        input: NewFooterContent,
    ) -> Result<FooterContent, RepositoryError> {
        let row: FooterRow = sqlx::query_as(
            r"
            INSERT INTO shop.footer_contents (section, title, content, links, is_active, position)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, section, title, content, links, is_active, position
            ",
        )
        .bind(input.section.as_str())
        .bind(&input.title)
        .bind(&input.content)
        .bind(Json(&input.links))
        .bind(input.is_active)
        .bind(input.position)
        .fetch_one(self.pool)
        .await?;

        row.into_content()
    }

    /// Update a footer content block. Returns `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update_footer_content(
        &self,
        id: FooterContentId,
        input: NewFooterContent,
    ) -> Result<Option<FooterContent>, RepositoryError> {
        let row: Option<FooterRow> = sqlx::query_as(
            r"
            UPDATE shop.footer_contents
            SET section = $2, title = $3, content = $4, links = $5, is_active = $6, position = $7
            WHERE id = $1
            RETURNING id, section, title, content, links, is_active, position
            ",
        )
        .bind(id)
        .bind(input.section.as_str())
        .bind(&input.title)
        .bind(&input.content)
        .bind(Json(&input.links))
        .bind(input.is_active)
        .bind(input.position)
        .fetch_optional(self.pool)
        .await?;

        row.map(FooterRow::into_content).transpose()
    }

    /// Delete a footer content block. Returns whether a row existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_footer_content(&self, id: FooterContentId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.footer_contents WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
