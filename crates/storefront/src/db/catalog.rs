//! Read-only catalog queries.
//!
//! Products are fetched in two steps (product rows, then their variants in
//! one batched query) and stitched in memory; variant order preserves
//! insertion order so the default-variant tie-break stays deterministic.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use sqlx::types::Json;

use fraiche_core::{
    Category, CategoryId, Farm, FarmId, Money, PriceVariant, PriceVariantId, Product, ProductId,
};

use super::RepositoryError;

/// Repository for storefront catalog reads.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    description: String,
    images: Json<Vec<String>>,
    videos: Json<Vec<String>>,
    category_id: CategoryId,
    farm_id: Option<FarmId>,
    stock: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct VariantRow {
    id: PriceVariantId,
    product_id: ProductId,
    label: String,
    price: Money,
    original_price: Option<Money>,
    is_default: bool,
}

/// A farm together with the number of active products attributed to it.
#[derive(Debug, Clone, Serialize)]
pub struct FarmWithCount {
    #[serde(flatten)]
    pub farm: Farm,
    pub product_count: i64,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All active products, newest first, with their price variants.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r"
            SELECT id, name, description, images, videos, category_id, farm_id,
                   stock, is_active, created_at, updated_at
            FROM shop.products
            WHERE is_active = TRUE
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        let ids: Vec<i32> = rows.iter().map(|r| r.id.as_i32()).collect();
        let variants = self.variants_for(&ids).await?;
        Ok(rows
            .into_iter()
            .map(|row| assemble_product(row, &variants))
            .collect())
    }

    /// One active product by ID, or `None`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r"
            SELECT id, name, description, images, videos, category_id, farm_id,
                   stock, is_active, created_at, updated_at
            FROM shop.products
            WHERE id = $1 AND is_active = TRUE
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(row) => {
                let variants = self.variants_for(&[row.id.as_i32()]).await?;
                Ok(Some(assemble_product(row, &variants)))
            }
            None => Ok(None),
        }
    }

    /// Active categories in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as(
            r"
            SELECT id, name, description, image, is_active, position, created_at, updated_at
            FROM shop.categories
            WHERE is_active = TRUE
            ORDER BY position, id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Active farms ordered by name, each with its active-product count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_farms(&self) -> Result<Vec<FarmWithCount>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct FarmRow {
            id: FarmId,
            name: String,
            description: Option<String>,
            location: Option<String>,
            image: Option<String>,
            is_active: bool,
            created_at: DateTime<Utc>,
            updated_at: DateTime<Utc>,
            product_count: i64,
        }

        let rows: Vec<FarmRow> = sqlx::query_as(
            r"
            SELECT f.id, f.name, f.description, f.location, f.image, f.is_active,
                   f.created_at, f.updated_at,
                   COUNT(p.id) FILTER (WHERE p.is_active) AS product_count
            FROM shop.farms f
            LEFT JOIN shop.products p ON p.farm_id = f.id
            WHERE f.is_active = TRUE
            GROUP BY f.id
            ORDER BY f.name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| FarmWithCount {
                farm: Farm {
                    id: row.id,
                    name: row.name,
                    description: row.description,
                    location: row.location,
                    image: row.image,
                    is_active: row.is_active,
                    created_at: row.created_at,
                    updated_at: row.updated_at,
                },
                product_count: row.product_count,
            })
            .collect())
    }

    /// Variants for a set of products, in insertion order per product.
    async fn variants_for(&self, product_ids: &[i32]) -> Result<Vec<VariantRow>, RepositoryError> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let variants = sqlx::query_as(
            r"
            SELECT id, product_id, label, price, original_price, is_default
            FROM shop.price_variants
            WHERE product_id = ANY($1)
            ORDER BY product_id, position, id
            ",
        )
        .bind(product_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(variants)
    }
}

fn assemble_product(row: ProductRow, variants: &[VariantRow]) -> Product {
    let prices = variants
        .iter()
        .filter(|v| v.product_id == row.id)
        .map(|v| PriceVariant {
            id: v.id,
            product_id: v.product_id,
            label: v.label.clone(),
            price: v.price,
            original_price: v.original_price,
            is_default: v.is_default,
        })
        .collect();

    Product {
        id: row.id,
        name: row.name,
        description: row.description,
        images: row.images.0,
        videos: row.videos.0,
        category_id: row.category_id,
        farm_id: row.farm_id,
        stock: row.stock,
        prices,
        is_active: row.is_active,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}
