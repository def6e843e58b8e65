//! Site content: social links, footer sections and the canonical site
//! settings schema.
//!
//! `SiteSettings` is the single internal representation of per-deployment
//! configuration. Wire payloads that historically arrived in mixed
//! camelCase/snake_case are normalized into this shape once, at the admin
//! boundary; nothing downstream sees the dual naming.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{FooterContentId, SocialLinkId};

/// A social media link shown in the storefront footer/header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct SocialLink {
    pub id: SocialLinkId,
    /// Platform slug (facebook, instagram, twitter, ...).
    pub platform: String,
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
    pub is_active: bool,
    pub position: i32,
}

/// Footer column a content block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterSection {
    Menu,
    Information,
    Reseaux,
}

impl FooterSection {
    /// Stable slug used in URLs and the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Information => "information",
            Self::Reseaux => "reseaux",
        }
    }

    /// Parse a slug; unknown values return `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "menu" => Some(Self::Menu),
            "information" => Some(Self::Information),
            "reseaux" => Some(Self::Reseaux),
            _ => None,
        }
    }
}

/// A link inside a footer content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
    pub is_external: bool,
}

/// One block of footer content, ordered by `position` within its section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub id: FooterContentId,
    pub section: FooterSection,
    pub title: String,
    pub content: String,
    pub links: Vec<FooterLink>,
    pub is_active: bool,
    pub position: i32,
}

/// Canonical per-deployment site configuration.
///
/// The branded storefront variants differ only in what this struct holds;
/// one codebase, many tenants. `updated_at` orders concurrent writes:
/// last-write-wins, a stale snapshot never replaces a newer one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub shop_name: String,
    pub shop_description: String,
    pub logo_url: Option<String>,
    pub background_image: Option<String>,
    /// Background overlay opacity, percent.
    pub background_opacity: i32,
    /// Background blur radius, pixels.
    pub background_blur: i32,
    pub info_content: Option<String>,
    pub contact_content: Option<String>,
    /// International number the checkout deep link targets, digits only.
    pub whatsapp_number: Option<String>,
    /// Full override link; takes precedence over `whatsapp_number`.
    pub whatsapp_link: Option<String>,
    pub scrolling_text: Option<String>,
    pub title_style: String,
    pub theme_color: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub schedule: Option<String>,
    /// Promotion carousel image URLs in display order.
    pub promotion_images: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl SiteSettings {
    /// Base of the WhatsApp deep link orders are sent through.
    ///
    /// An explicit `whatsapp_link` wins; otherwise the number is inlined;
    /// with neither configured the bare `wa.me` form is used and WhatsApp
    /// asks the shopper to pick a recipient.
    #[must_use]
    pub fn whatsapp_base(&self) -> String {
        if let Some(link) = self.whatsapp_link.as_deref()
            && !link.is_empty()
        {
            return link.trim_end_matches('/').to_string();
        }
        match self.whatsapp_number.as_deref() {
            Some(number) if !number.is_empty() => format!("https://wa.me/{number}"),
            _ => "https://wa.me/".to_string(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            shop_name: "Boutique Fraîche".to_string(),
            shop_description: String::new(),
            logo_url: None,
            background_image: None,
            background_opacity: 20,
            background_blur: 5,
            info_content: None,
            contact_content: None,
            whatsapp_number: None,
            whatsapp_link: None,
            scrolling_text: None,
            title_style: "glow".to_string(),
            theme_color: None,
            address: None,
            phone: None,
            email: None,
            schedule: None,
            promotion_images: Vec::new(),
            updated_at: DateTime::<Utc>::MIN_UTC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_section_round_trip() {
        for section in [
            FooterSection::Menu,
            FooterSection::Information,
            FooterSection::Reseaux,
        ] {
            assert_eq!(FooterSection::parse(section.as_str()), Some(section));
        }
        assert_eq!(FooterSection::parse("sidebar"), None);
    }

    #[test]
    fn test_whatsapp_base_precedence() {
        let mut settings = SiteSettings::default();
        assert_eq!(settings.whatsapp_base(), "https://wa.me/");

        settings.whatsapp_number = Some("33612345678".to_string());
        assert_eq!(settings.whatsapp_base(), "https://wa.me/33612345678");

        settings.whatsapp_link = Some("https://wa.me/33700000000/".to_string());
        assert_eq!(settings.whatsapp_base(), "https://wa.me/33700000000");
    }
}
