use std::sync::Arc;

use hunter_core::model::Progress;
use storage::repository::{ProgressRepository, StorageError};
use tracing::{debug, warn};

/// Loads and saves `Progress`, absorbing read failures.
#[derive(Clone)]
pub struct ProgressStore {
    repo: Arc<dyn ProgressRepository>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(repo: Arc<dyn ProgressRepository>) -> Self {
        Self { repo }
    }

    /// Load saved progress, or defaults if nothing usable is stored.
    ///
    /// Corrupt or unreadable data is logged and treated as absent.
    pub async fn load(&self) -> Progress {
        match self.repo.get_progress().await {
            Ok(Some(progress)) => {
                debug!(
                    score = progress.score(),
                    completed = progress.bugs_fixed(),
                    "loaded saved progress"
                );
                progress
            }
            Ok(None) => {
                debug!("no saved progress, starting fresh");
                Progress::default()
            }
            Err(err) => {
                warn!(error = %err, "discarding unreadable saved progress");
                Progress::default()
            }
        }
    }

    /// Persist `progress` in full.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails. Callers keep playing on the
    /// in-memory value.
    pub async fn save(&self, progress: &Progress) -> Result<(), StorageError> {
        self.repo.save_progress(progress).await.inspect_err(|err| {
            warn!(error = %err, score = progress.score(), "failed to save progress");
        })
    }

    /// Remove saved progress.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entries cannot be removed.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.repo.clear_progress().await
    }
}
