//! Category route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use fraiche_core::{Category, CategoryId};

use crate::db::{CategoryRepository, NewCategory};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Category payload on create/update.
#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub position: i32,
}

const fn default_true() -> bool {
    true
}

impl CategoryPayload {
    fn into_input(self) -> Result<NewCategory> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        Ok(NewCategory {
            name: self.name,
            description: self.description,
            image: self.image,
            is_active: self.is_active,
            position: self.position,
        })
    }
}

/// List all categories in display order.
#[instrument(skip(state))]
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>> {
    Ok(Json(CategoryRepository::new(state.pool()).list().await?))
}

/// Fetch a single category.
#[instrument(skip(state))]
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Category>> {
    let id = CategoryId::new(id);
    CategoryRepository::new(state.pool())
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("category {id}")))
}

/// Create a category.
#[instrument(skip(state, payload))]
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<CategoryPayload>,
) -> Result<(StatusCode, Json<Category>)> {
    let category = CategoryRepository::new(state.pool())
        .create(payload.into_input()?)
        .await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Update a category.
#[instrument(skip(state, payload))]
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<Category>> {
    let id = CategoryId::new(id);
    CategoryRepository::new(state.pool())
        .update(id, payload.into_input()?)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("category {id}")))
}

/// Delete a category.
#[instrument(skip(state))]
pub async fn destroy(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let id = CategoryId::new(id);
    if CategoryRepository::new(state.pool()).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("category {id}")))
    }
}
