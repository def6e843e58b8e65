//! Farm route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::FarmWithCount;
use crate::error::Result;
use crate::state::AppState;

/// List active farms with their product counts.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<FarmWithCount>>> {
    Ok(Json(state.catalog().farms().await?))
}
