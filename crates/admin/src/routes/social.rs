//! Social link route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use fraiche_core::{SocialLink, SocialLinkId};

use crate::db::{ContentRepository, NewSocialLink};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Social link payload on create/update.
#[derive(Debug, Deserialize)]
pub struct SocialLinkPayload {
    pub platform: String,
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub position: i32,
}

const fn default_true() -> bool {
    true
}

impl SocialLinkPayload {
    fn into_input(self) -> Result<NewSocialLink> {
        if self.platform.trim().is_empty() || self.name.trim().is_empty() || self.url.trim().is_empty()
        {
            return Err(AppError::BadRequest(
                "platform, name and url are required".to_string(),
            ));
        }
        Ok(NewSocialLink {
            platform: self.platform,
            name: self.name,
            url: self.url,
            icon: self.icon,
            is_active: self.is_active,
            position: self.position,
        })
    }
}

/// List all social links in display order.
#[instrument(skip(state))]
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<SocialLink>>> {
    Ok(Json(
        ContentRepository::new(state.pool())
            .list_social_links()
            .await?,
    ))
}

/// Create a social link.
#[instrument(skip(state, payload))]
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<SocialLinkPayload>,
) -> Result<(StatusCode, Json<SocialLink>)> {
    let link = ContentRepository::new(state.pool())
        .create_social_link(payload.into_input()?)
        .await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// Update a social link.
#[instrument(skip(state, payload))]
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SocialLinkPayload>,
) -> Result<Json<SocialLink>> {
    let id = SocialLinkId::new(id);
    ContentRepository::new(state.pool())
        .update_social_link(id, payload.into_input()?)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("social link {id}")))
}

/// Delete a social link.
#[instrument(skip(state))]
pub async fn destroy(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let id = SocialLinkId::new(id);
    if ContentRepository::new(state.pool())
        .delete_social_link(id)
        .await?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("social link {id}")))
    }
}
