//! Category route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use fraiche_core::Category;

use crate::error::Result;
use crate::state::AppState;

/// List active categories in display order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    Ok(Json(state.catalog().categories().await?))
}
