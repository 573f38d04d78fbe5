use std::sync::Arc;

use hunter_core::Catalog;
use services::{GameSession, ProgressStore};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn progress_store(&self) -> ProgressStore;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    progress_store: ProgressStore,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            progress_store: app.progress_store(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Load saved progress and open a session on the menu.
    pub async fn start_session(&self) -> GameSession {
        GameSession::start(self.catalog(), self.progress_store.clone()).await
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
