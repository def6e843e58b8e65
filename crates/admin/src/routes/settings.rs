//! Site settings route handlers.
//!
//! This is the one place the wire's historical camelCase/snake_case dual
//! naming is reconciled: serde aliases on the payload accept either form,
//! normalization happens here, and only the canonical snake_case
//! `SiteSettings` travels inward. A payload carrying both spellings of a
//! field is rejected by serde as a duplicate, not silently merged.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use fraiche_core::SiteSettings;

use crate::db::SettingsRepository;
use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Partial settings update payload.
///
/// Every field is optional; omitted fields keep their stored value. An
/// empty string clears an optional field.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsPayload {
    #[serde(alias = "shopName", alias = "shopTitle", alias = "shop_title")]
    pub shop_name: Option<String>,
    #[serde(alias = "shopDescription")]
    pub shop_description: Option<String>,
    #[serde(alias = "logoUrl")]
    pub logo_url: Option<String>,
    #[serde(alias = "backgroundImage")]
    pub background_image: Option<String>,
    #[serde(alias = "backgroundOpacity")]
    pub background_opacity: Option<i32>,
    #[serde(alias = "backgroundBlur")]
    pub background_blur: Option<i32>,
    #[serde(alias = "infoContent")]
    pub info_content: Option<String>,
    #[serde(alias = "contactContent")]
    pub contact_content: Option<String>,
    #[serde(alias = "whatsappNumber")]
    pub whatsapp_number: Option<String>,
    #[serde(alias = "whatsappLink")]
    pub whatsapp_link: Option<String>,
    #[serde(alias = "scrollingText")]
    pub scrolling_text: Option<String>,
    #[serde(alias = "titleStyle")]
    pub title_style: Option<String>,
    #[serde(alias = "themeColor")]
    pub theme_color: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub schedule: Option<String>,
    #[serde(alias = "promotionImages")]
    pub promotion_images: Option<Vec<String>>,
}

/// Empty strings clear optional fields; `None` leaves them unchanged.
fn merge_optional(target: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        *target = if value.is_empty() { None } else { Some(value) };
    }
}

impl SettingsPayload {
    /// Apply this partial update onto the stored settings.
    fn apply(self, mut settings: SiteSettings) -> SiteSettings {
        if let Some(name) = self.shop_name {
            settings.shop_name = name;
        }
        if let Some(description) = self.shop_description {
            settings.shop_description = description;
        }
        merge_optional(&mut settings.logo_url, self.logo_url);
        merge_optional(&mut settings.background_image, self.background_image);
        if let Some(opacity) = self.background_opacity {
            settings.background_opacity = opacity;
        }
        if let Some(blur) = self.background_blur {
            settings.background_blur = blur;
        }
        merge_optional(&mut settings.info_content, self.info_content);
        merge_optional(&mut settings.contact_content, self.contact_content);
        merge_optional(&mut settings.whatsapp_number, self.whatsapp_number);
        merge_optional(&mut settings.whatsapp_link, self.whatsapp_link);
        merge_optional(&mut settings.scrolling_text, self.scrolling_text);
        if let Some(style) = self.title_style {
            settings.title_style = style;
        }
        merge_optional(&mut settings.theme_color, self.theme_color);
        merge_optional(&mut settings.address, self.address);
        merge_optional(&mut settings.phone, self.phone);
        merge_optional(&mut settings.email, self.email);
        merge_optional(&mut settings.schedule, self.schedule);
        if let Some(images) = self.promotion_images {
            settings.promotion_images = images;
        }
        settings
    }
}

/// The stored settings.
#[instrument(skip(state))]
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<SiteSettings>> {
    Ok(Json(SettingsRepository::new(state.pool()).get().await?))
}

/// Merge a partial update into the stored settings.
///
/// The save stamps `updated_at`; the storefront picks the new snapshot up
/// on its next `/settings/refresh`.
#[instrument(skip(state, payload))]
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<SettingsPayload>,
) -> Result<Json<SiteSettings>> {
    let repo = SettingsRepository::new(state.pool());
    let merged = payload.apply(repo.get().await?);
    let stored = repo.upsert(&merged).await?;
    Ok(Json(stored))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_accepts_camel_case_aliases() {
        let payload: SettingsPayload = serde_json::from_str(
            r#"{
                "shopTitle": "CALIWHITE",
                "backgroundOpacity": 40,
                "whatsappNumber": "33612345678",
                "scrolling_text": "Livraison offerte"
            }"#,
        )
        .unwrap();

        assert_eq!(payload.shop_name.as_deref(), Some("CALIWHITE"));
        assert_eq!(payload.background_opacity, Some(40));
        assert_eq!(payload.whatsapp_number.as_deref(), Some("33612345678"));
        assert_eq!(payload.scrolling_text.as_deref(), Some("Livraison offerte"));
    }

    #[test]
    fn test_payload_rejects_both_spellings() {
        let result: std::result::Result<SettingsPayload, _> = serde_json::from_str(
            r#"{"background_image": "a.jpg", "backgroundImage": "b.jpg"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_merges_partial_update() {
        let payload: SettingsPayload =
            serde_json::from_str(r#"{"shopName": "MEXICAIN", "backgroundBlur": 8}"#).unwrap();

        let mut stored = SiteSettings::default();
        stored.whatsapp_number = Some("33700000000".to_string());

        let merged = payload.apply(stored);
        assert_eq!(merged.shop_name, "MEXICAIN");
        assert_eq!(merged.background_blur, 8);
        // Untouched fields survive
        assert_eq!(merged.whatsapp_number.as_deref(), Some("33700000000"));
    }

    #[test]
    fn test_apply_empty_string_clears_optional_field() {
        let payload: SettingsPayload =
            serde_json::from_str(r#"{"whatsappNumber": ""}"#).unwrap();

        let mut stored = SiteSettings::default();
        stored.whatsapp_number = Some("33700000000".to_string());

        let merged = payload.apply(stored);
        assert_eq!(merged.whatsapp_number, None);
    }
}
