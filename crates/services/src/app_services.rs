use std::sync::Arc;

use hunter_core::Catalog;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::progress_store::ProgressStore;
use crate::sessions::GameSession;

/// Assembles app-facing services around the built-in catalog.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    progress_store: ProgressStore,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// bundled catalog is invalid.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage)
    }

    /// Build services over an existing storage bundle.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the bundled catalog is invalid.
    pub fn from_storage(storage: &Storage) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(Catalog::builtin()?.clone());
        Ok(Self::with_catalog(catalog, storage))
    }

    #[must_use]
    pub fn with_catalog(catalog: Arc<Catalog>, storage: &Storage) -> Self {
        Self {
            catalog,
            progress_store: ProgressStore::new(Arc::clone(&storage.progress)),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress_store(&self) -> ProgressStore {
        self.progress_store.clone()
    }

    /// Load saved progress and open a new session on the menu.
    pub async fn start_session(&self) -> GameSession {
        GameSession::start(self.catalog(), self.progress_store()).await
    }
}
