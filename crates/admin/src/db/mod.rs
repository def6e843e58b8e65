//! Database operations for the admin.
//!
//! The admin owns writes to the shared `shop` schema:
//!
//! ## Tables
//!
//! - `shop.categories`, `shop.farms` - Catalog groupings
//! - `shop.products`, `shop.price_variants` - Catalog
//! - `shop.social_links`, `shop.footer_contents` - Site content
//! - `shop.site_settings` - Single-row canonical settings
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p fraiche-cli -- migrate
//! ```

pub mod categories;
pub mod content;
pub mod farms;
pub mod products;
pub mod settings;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub use categories::{CategoryRepository, NewCategory};
pub use content::{ContentRepository, NewFooterContent, NewSocialLink};
pub use farms::{FarmRepository, NewFarm};
pub use products::{NewPriceVariant, NewProduct, ProductRepository, UpdateProduct};
pub use settings::SettingsRepository;

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
