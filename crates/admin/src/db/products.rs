//! Product repository: CRUD over products and their price variants.
//!
//! Updates replace the variant list wholesale inside one transaction, so a
//! product's variants always reflect exactly the last submitted form.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};

use fraiche_core::{CategoryId, FarmId, Money, PriceVariant, PriceVariantId, Product, ProductId};

use super::RepositoryError;

/// Input for a price variant on create/update.
#[derive(Debug, Clone)]
pub struct NewPriceVariant {
    pub label: String,
    pub price: Money,
    pub original_price: Option<Money>,
    pub is_default: bool,
}

/// Input for product creation.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub category_id: CategoryId,
    pub farm_id: Option<FarmId>,
    pub stock: i32,
    pub is_active: bool,
    pub prices: Vec<NewPriceVariant>,
}

/// Input for product update: a full replacement, variants included.
pub type UpdateProduct = NewProduct;

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

impl VariantRow {
    fn to_variant(&self) -> PriceVariant {
        PriceVariant {
            id: self.id,
            product_id: self.product_id,
            label: self.label.clone(),
            price: self.price,
            original_price: self.original_price,
            is_default: self.is_default,
        }
    }
}

/// Repository for admin product operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All products (active and inactive), newest first, with variants.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r"
            SELECT id, name, description, images, videos, category_id, farm_id,
                   stock, is_active, created_at, updated_at
            FROM shop.products
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        let ids: Vec<i32> = rows.iter().map(|r| r.id.as_i32()).collect();
        let variants: Vec<VariantRow> = sqlx::query_as(
            r"
            SELECT id, product_id, label, price, original_price, is_default
            FROM shop.price_variants
            WHERE product_id = ANY($1)
            ORDER BY product_id, position, id
            ",
        )
        .bind(&ids)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let prices = variants
                    .iter()
                    .filter(|v| v.product_id == row.id)
                    .map(VariantRow::to_variant)
                    .collect();
                assemble(row, prices)
            })
            .collect())
    }

    /// One product by ID, any active state.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r"
            SELECT id, name, description, images, videos, category_id, farm_id,
                   stock, is_active, created_at, updated_at
            FROM shop.products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let variants: Vec<VariantRow> = sqlx::query_as(
            r"
            SELECT id, product_id, label, price, original_price, is_default
            FROM shop.price_variants
            WHERE product_id = $1
            ORDER BY position, id
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some(assemble(
            row,
            variants.iter().map(VariantRow::to_variant).collect(),
        )))
    }

    /// Create a product with its variants in one transaction.
    ///
    /// When no submitted variant is flagged default, the first becomes the
    /// default; flags are otherwise stored as given.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails; the
    /// transaction rolls back.
    pub async fn create(&self, input: NewProduct) -> Result<Product, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row: ProductRow = sqlx::query_as(
            r"
            INSERT INTO shop.products
                (name, description, images, videos, category_id, farm_id, stock, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, description, images, videos, category_id, farm_id,
                      stock, is_active, created_at, updated_at
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(Json(&input.images))
        .bind(Json(&input.videos))
        .bind(input.category_id)
        .bind(input.farm_id)
        .bind(input.stock)
        .bind(input.is_active)
        .fetch_one(&mut *tx)
        .await?;

        let prices = insert_variants(&mut tx, row.id, &input.prices).await?;
        tx.commit().await?;

        Ok(assemble(row, prices))
    }

    /// Replace a product and its variant list. Returns `None` when the
    /// product does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails; the
    /// transaction rolls back.
    pub async fn update(
        &self,
        id: ProductId,
        input: UpdateProduct,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row: Option<ProductRow> = sqlx::query_as(
            r"
            UPDATE shop.products
            SET name = $2, description = $3, images = $4, videos = $5,
                category_id = $6, farm_id = $7, stock = $8, is_active = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, images, videos, category_id, farm_id,
                      stock, is_active, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(Json(&input.images))
        .bind(Json(&input.videos))
        .bind(input.category_id)
        .bind(input.farm_id)
        .bind(input.stock)
        .bind(input.is_active)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("DELETE FROM shop.price_variants WHERE product_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let prices = insert_variants(&mut tx, id, &input.prices).await?;
        tx.commit().await?;

        Ok(Some(assemble(row, prices)))
    }

    /// Delete a product (variants cascade). Returns whether a row existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Insert the variant list in submitted order, normalizing the default flag.
async fn insert_variants(
    tx: &mut Transaction<'_, Postgres>,
    product_id: ProductId,
    inputs: &[NewPriceVariant],
) -> Result<Vec<PriceVariant>, RepositoryError> {
    let any_default = inputs.iter().any(|v| v.is_default);
    let mut variants = Vec::with_capacity(inputs.len());

    for (index, input) in inputs.iter().enumerate() {
        let is_default = input.is_default || (!any_default && index == 0);
        let position = i32::try_from(index).unwrap_or(i32::MAX);

        let row: VariantRow = sqlx::query_as(
            r"
            INSERT INTO shop.price_variants
                (product_id, label, price, original_price, is_default, position)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, product_id, label, price, original_price, is_default
            ",
        )
        .bind(product_id)
        .bind(&input.label)
        .bind(input.price)
        .bind(input.original_price)
        .bind(is_default)
        .bind(position)
        .fetch_one(&mut **tx)
        .await?;

        variants.push(row.to_variant());
    }

    Ok(variants)
}

fn assemble(row: ProductRow, prices: Vec<PriceVariant>) -> Product {
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
