//! Shared error types for the services crate.

use thiserror::Error;

use hunter_core::CatalogError;
use hunter_core::model::ChallengeId;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `GameSession`.
///
/// `UnknownChallenge` and `Locked` are invalid selections: the session state is
/// left untouched when either is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("unknown challenge: {0}")]
    UnknownChallenge(ChallengeId),
    #[error("challenge {0} is locked")]
    Locked(ChallengeId),
    #[error("no challenge is being played")]
    NotPlaying,
    #[error("challenge {0} is not the one being played")]
    NotCurrent(ChallengeId),
    #[error("a result is already showing")]
    ResultPending,
    #[error("no successful result to advance from")]
    NoResult,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// True for rejected selections (unknown or locked ids).
    #[must_use]
    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, Self::UnknownChallenge(_) | Self::Locked(_))
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
