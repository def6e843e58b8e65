//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::catalog::CatalogService;
use crate::config::StorefrontConfig;
use crate::db::RepositoryError;
use crate::settings::SettingsStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: PgPool,
    catalog: CatalogService,
    settings: SettingsStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Loads the initial settings snapshot from the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial settings load fails.
    pub async fn new(config: StorefrontConfig, pool: PgPool) -> Result<Self, RepositoryError> {
        let catalog = CatalogService::new(pool.clone());
        let settings = SettingsStore::load(pool.clone()).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                catalog,
                settings,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the cached catalog service.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Get a reference to the observable settings store.
    #[must_use]
    pub fn settings(&self) -> &SettingsStore {
        &self.inner.settings
    }
}
