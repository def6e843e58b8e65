//! Product route handlers.
//!
//! Mirrors the storefront's product shape but over the full catalog
//! (inactive products included). Updates replace the variant list.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use fraiche_core::{CategoryId, FarmId, Money, Product, ProductId};

use crate::db::{NewPriceVariant, NewProduct, ProductRepository};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Price variant payload on create/update.
#[derive(Debug, Deserialize)]
pub struct PriceVariantPayload {
    pub label: String,
    pub price: Money,
    pub original_price: Option<Money>,
    #[serde(default)]
    pub is_default: bool,
}

/// Product payload on create/update.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    pub category_id: CategoryId,
    pub farm_id: Option<FarmId>,
    #[serde(default)]
    pub stock: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub prices: Vec<PriceVariantPayload>,
}

const fn default_true() -> bool {
    true
}

impl ProductPayload {
    /// Validate and convert into repository input.
    fn into_input(self) -> Result<NewProduct> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        if self.prices.is_empty() {
            return Err(AppError::BadRequest(
                "at least one price variant is required".to_string(),
            ));
        }

        Ok(NewProduct {
            name: self.name,
            description: self.description,
            images: self.images,
            videos: self.videos,
            category_id: self.category_id,
            farm_id: self.farm_id,
            stock: self.stock,
            is_active: self.is_active,
            prices: self
                .prices
                .into_iter()
                .map(|p| NewPriceVariant {
                    label: p.label,
                    price: p.price,
                    original_price: p.original_price,
                    is_default: p.is_default,
                })
                .collect(),
        })
    }
}

/// List all products, newest first.
#[instrument(skip(state))]
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(ProductRepository::new(state.pool()).list().await?))
}

/// Fetch a single product.
#[instrument(skip(state))]
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    ProductRepository::new(state.pool())
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Create a product with its price variants.
#[instrument(skip(state, payload))]
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = ProductRepository::new(state.pool())
        .create(payload.into_input()?)
        .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product and its variant list.
#[instrument(skip(state, payload))]
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    ProductRepository::new(state.pool())
        .update(id, payload.into_input()?)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Delete a product (variants cascade).
#[instrument(skip(state))]
pub async fn destroy(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let id = ProductId::new(id);
    if ProductRepository::new(state.pool()).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("product {id}")))
    }
}
