//! Observable site-settings store.
//!
//! Replaces the old polling + ad hoc browser-event propagation with one
//! explicit publish/subscribe structure: a snapshot behind a
//! `tokio::sync::watch` channel. Readers take the current snapshot without
//! locking; `refresh` reloads from the repository and publishes.
//!
//! Update ordering is last-write-wins by the row's `updated_at`: a reload
//! that yields an older timestamp than the published snapshot is discarded,
//! so refreshes racing each other cannot roll settings back.

use sqlx::PgPool;
use tokio::sync::watch;
use tracing::{debug, instrument};

use fraiche_core::SiteSettings;

use crate::db::{ContentRepository, RepositoryError};

/// Shared, observable site settings.
#[derive(Clone)]
pub struct SettingsStore {
    pool: PgPool,
    tx: watch::Sender<SiteSettings>,
}

impl SettingsStore {
    /// Load the initial snapshot and create the store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the initial load fails.
    pub async fn load(pool: PgPool) -> Result<Self, RepositoryError> {
        let initial = ContentRepository::new(&pool).load_settings().await?;
        let (tx, _rx) = watch::channel(initial);
        Ok(Self { pool, tx })
    }

    /// The current settings snapshot.
    #[must_use]
    pub fn current(&self) -> SiteSettings {
        self.tx.borrow().clone()
    }

    /// Subscribe to settings updates.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SiteSettings> {
        self.tx.subscribe()
    }

    /// Reload from the database and publish if newer.
    ///
    /// Returns the snapshot now in effect (the reloaded one, or the
    /// existing one when the reload was stale).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the reload query fails; the published
    /// snapshot is left untouched in that case.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<SiteSettings, RepositoryError> {
        let loaded = ContentRepository::new(&self.pool).load_settings().await?;

        self.tx.send_if_modified(|current| {
            if loaded.updated_at < current.updated_at {
                debug!(
                    loaded = %loaded.updated_at,
                    current = %current.updated_at,
                    "Discarding stale settings reload"
                );
                return false;
            }
            if *current == loaded {
                return false;
            }
            *current = loaded.clone();
            true
        });

        Ok(self.current())
    }
}
