//! Footer content route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use fraiche_core::{FooterContent, FooterContentId, FooterLink, FooterSection};

use crate::db::{ContentRepository, NewFooterContent};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Footer content payload on create/update.
#[derive(Debug, Deserialize)]
pub struct FooterContentPayload {
    pub section: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub position: i32,
}

const fn default_true() -> bool {
    true
}

impl FooterContentPayload {
    fn into_input(self) -> Result<NewFooterContent> {
        let section = FooterSection::parse(&self.section).ok_or_else(|| {
            AppError::BadRequest(format!("unknown footer section: {}", self.section))
        })?;
        if self.title.trim().is_empty() {
            return Err(AppError::BadRequest("title is required".to_string()));
        }
        Ok(NewFooterContent {
            section,
            title: self.title,
            content: self.content,
            links: self.links,
            is_active: self.is_active,
            position: self.position,
        })
    }
}

/// List all footer content ordered by section then position.
#[instrument(skip(state))]
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<FooterContent>>> {
    Ok(Json(
        ContentRepository::new(state.pool())
            .list_footer_contents()
            .await?,
    ))
}

/// Create a footer content block.
#[instrument(skip(state, payload))]
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<FooterContentPayload>,
) -> Result<(StatusCode, Json<FooterContent>)> {
    let content = ContentRepository::new(state.pool())
        .create_footer_content(payload.into_input()?)
        .await?;
    Ok((StatusCode::CREATED, Json(content)))
}

/// Update a footer content block.
#[instrument(skip(state, payload))]
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<FooterContentPayload>,
) -> Result<Json<FooterContent>> {
    let id = FooterContentId::new(id);
    ContentRepository::new(state.pool())
        .update_footer_content(id, payload.into_input()?)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("footer content {id}")))
}

/// Delete a footer content block.
#[instrument(skip(state))]
pub async fn destroy(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let id = FooterContentId::new(id);
    if ContentRepository::new(state.pool())
        .delete_footer_content(id)
        .await?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("footer content {id}")))
    }
}
