//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use fraiche_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List active products, newest first, with variants embedded.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.catalog().products().await?))
}

/// Fetch a single active product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    state
        .catalog()
        .product(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
