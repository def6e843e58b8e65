//! Database access for the storefront.
//!
//! The storefront reads the shared `shop` schema the admin writes:
//!
//! ## Tables
//!
//! - `shop.products` / `shop.price_variants` - Catalog
//! - `shop.categories`, `shop.farms` - Catalog groupings
//! - `shop.social_links`, `shop.footer_contents` - Site content
//! - `shop.site_settings` - Single-row canonical settings
//!
//! Session storage lives in the `tower_sessions` schema managed by the
//! session store itself.
//!
//! # Migrations
//!
//! The schema is owned by the admin crate; run migrations via:
//! ```bash
//! cargo run -p fraiche-cli -- migrate
//! ```

pub mod catalog;
pub mod content;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub use catalog::{CatalogRepository, FarmWithCount};
pub use content::ContentRepository;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
