use async_trait::async_trait;
use hunter_core::model::Progress;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::progress_codec::{self, COMPLETED_KEY, SCORE_KEY};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the player's persisted progress.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch saved progress.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if stored entries are corrupt, or
    /// `StorageError::Connection` if the backend cannot be read.
    async fn get_progress(&self) -> Result<Option<Progress>, StorageError>;

    /// Persist both progress entries, replacing any previous values.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the progress cannot be stored.
    async fn save_progress(&self, progress: &Progress) -> Result<(), StorageError>;

    /// Remove saved progress so the next load yields defaults.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entries cannot be removed.
    async fn clear_progress(&self) -> Result<(), StorageError>;
}

/// Simple in-memory key-value repository for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Overwrite a raw entry, bypassing encoding. Useful for corrupt-data tests.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Read a raw entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn get_progress(&self) -> Result<Option<Progress>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        progress_codec::decode(
            guard.get(SCORE_KEY).map(String::as_str),
            guard.get(COMPLETED_KEY).map(String::as_str),
        )
    }

    async fn save_progress(&self, progress: &Progress) -> Result<(), StorageError> {
        let encoded = progress_codec::encode(progress)?;
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        for (key, value) in encoded {
            guard.insert(key.to_string(), value);
        }
        Ok(())
    }

    async fn clear_progress(&self) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(SCORE_KEY);
        guard.remove(COMPLETED_KEY);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let progress: Arc<dyn ProgressRepository> = Arc::new(InMemoryRepository::new());
        Self { progress }
    }
}
