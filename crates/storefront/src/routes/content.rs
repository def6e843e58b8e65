//! Site content route handlers: social links, footer and settings.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use fraiche_core::{FooterContent, FooterSection, SiteSettings, SocialLink};

use crate::db::ContentRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Footer listing query parameters.
#[derive(Debug, Deserialize)]
pub struct FooterQuery {
    pub section: Option<String>,
}

/// List active social links in display order.
#[instrument(skip(state))]
pub async fn social(State(state): State<AppState>) -> Result<Json<Vec<SocialLink>>> {
    let links = ContentRepository::new(state.pool())
        .list_social_links()
        .await?;
    Ok(Json(links))
}

/// List active footer content, optionally restricted to one section.
#[instrument(skip(state))]
pub async fn footer(
    State(state): State<AppState>,
    Query(query): Query<FooterQuery>,
) -> Result<Json<Vec<FooterContent>>> {
    let section = match query.section.as_deref() {
        Some(slug) => Some(
            FooterSection::parse(slug)
                .ok_or_else(|| AppError::BadRequest(format!("unknown footer section: {slug}")))?,
        ),
        None => None,
    };

    let contents = ContentRepository::new(state.pool())
        .list_footer_contents(section)
        .await?;
    Ok(Json(contents))
}

/// The current settings snapshot.
#[instrument(skip(state))]
pub async fn settings(State(state): State<AppState>) -> Json<SiteSettings> {
    Json(state.settings().current())
}

/// Reload settings from the database and publish to subscribers.
///
/// Also drops the catalog cache so admin edits become visible at once.
/// Replaces the old client-side polling: the admin calls this after a
/// save, every subscriber observes the new snapshot immediately.
#[instrument(skip(state))]
pub async fn refresh(State(state): State<AppState>) -> Result<Json<SiteSettings>> {
    state.catalog().invalidate();
    let snapshot = state.settings().refresh().await?;
    Ok(Json(snapshot))
}
