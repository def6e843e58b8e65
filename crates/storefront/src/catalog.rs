//! Cached catalog reads.
//!
//! Wraps the catalog repository behind a `moka` cache (5-minute TTL) so the
//! hot storefront endpoints do not hit `PostgreSQL` on every request. The
//! admin writes directly to the database; staleness is bounded by the TTL
//! and the cache can be dropped wholesale via [`CatalogService::invalidate`].

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use sqlx::PgPool;
use tracing::{debug, instrument};

use fraiche_core::{Category, Product, ProductId};

use crate::db::{CatalogRepository, FarmWithCount, RepositoryError};

/// Cache key for catalog lookups.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Products,
    Product(ProductId),
    Categories,
    Farms,
}

/// Cached value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Products(Vec<Product>),
    Product(Box<Product>),
    Categories(Vec<Category>),
    Farms(Vec<FarmWithCount>),
}

/// Catalog reads with a short-lived in-process cache.
#[derive(Clone)]
pub struct CatalogService {
    inner: Arc<CatalogServiceInner>,
}

struct CatalogServiceInner {
    pool: PgPool,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogService {
    /// Create a new catalog service over the shared pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogServiceInner { pool, cache }),
        }
    }

    /// All active products, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the underlying query fails.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, RepositoryError> {
        if let Some(CacheValue::Products(products)) =
            self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let products = CatalogRepository::new(&self.inner.pool)
            .list_products()
            .await?;
        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// One active product, or `None`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the underlying query fails.
    #[instrument(skip(self))]
    pub async fn product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        if let Some(CacheValue::Product(product)) =
            self.inner.cache.get(&CacheKey::Product(id)).await
        {
            debug!("Cache hit for product");
            return Ok(Some(*product));
        }

        let product = CatalogRepository::new(&self.inner.pool)
            .get_product(id)
            .await?;
        if let Some(product) = &product {
            self.inner
                .cache
                .insert(
                    CacheKey::Product(id),
                    CacheValue::Product(Box::new(product.clone())),
                )
                .await;
        }
        Ok(product)
    }

    /// Active categories in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the underlying query fails.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
        if let Some(CacheValue::Categories(categories)) =
            self.inner.cache.get(&CacheKey::Categories).await
        {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let categories = CatalogRepository::new(&self.inner.pool)
            .list_categories()
            .await?;
        self.inner
            .cache
            .insert(
                CacheKey::Categories,
                CacheValue::Categories(categories.clone()),
            )
            .await;
        Ok(categories)
    }

    /// Active farms with product counts.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the underlying query fails.
    #[instrument(skip(self))]
    pub async fn farms(&self) -> Result<Vec<FarmWithCount>, RepositoryError> {
        if let Some(CacheValue::Farms(farms)) = self.inner.cache.get(&CacheKey::Farms).await {
            debug!("Cache hit for farms");
            return Ok(farms);
        }

        let farms = CatalogRepository::new(&self.inner.pool).list_farms().await?;
        self.inner
            .cache
            .insert(CacheKey::Farms, CacheValue::Farms(farms.clone()))
            .await;
        Ok(farms)
    }

    /// Drop every cached entry (used by the refresh endpoint).
    pub fn invalidate(&self) {
        self.inner.cache.invalidate_all();
    }
}
