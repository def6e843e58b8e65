//! Farm route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use fraiche_core::{Farm, FarmId};

use crate::db::{FarmRepository, NewFarm};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Farm payload on create/update.
#[derive(Debug, Deserialize)]
pub struct FarmPayload {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

const fn default_true() -> bool {
    true
}

impl FarmPayload {
    fn into_input(self) -> Result<NewFarm> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        Ok(NewFarm {
            name: self.name,
            description: self.description,
            location: self.location,
            image: self.image,
            is_active: self.is_active,
        })
    }
}

/// List all farms ordered by name.
#[instrument(skip(state))]
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Farm>>> {
    Ok(Json(FarmRepository::new(state.pool()).list().await?))
}

/// Fetch a single farm.
#[instrument(skip(state))]
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Farm>> {
    let id = FarmId::new(id);
    FarmRepository::new(state.pool())
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("farm {id}")))
}

/// Create a farm.
#[instrument(skip(state, payload))]
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<FarmPayload>,
) -> Result<(StatusCode, Json<Farm>)> {
    let farm = FarmRepository::new(state.pool())
        .create(payload.into_input()?)
        .await?;
    Ok((StatusCode::CREATED, Json(farm)))
}

/// Update a farm.
#[instrument(skip(state, payload))]
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<FarmPayload>,
) -> Result<Json<Farm>> {
    let id = FarmId::new(id);
    FarmRepository::new(state.pool())
        .update(id, payload.into_input()?)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("farm {id}")))
}

/// Delete a farm.
#[instrument(skip(state))]
pub async fn destroy(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let id = FarmId::new(id);
    if FarmRepository::new(state.pool()).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("farm {id}")))
    }
}
