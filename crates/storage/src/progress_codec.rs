//! Two-entry key-value encoding of `Progress`.
//!
//! The score is stored as decimal text and the completed set as a JSON array of
//! id strings, so the layout matches what the browser build kept in local
//! storage.

use hunter_core::model::{ChallengeId, Progress};

use crate::repository::StorageError;

pub const SCORE_KEY: &str = "bugHunter_score";
pub const COMPLETED_KEY: &str = "bugHunter_completed";

/// Encoded `(key, value)` pairs for both entries.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the id list cannot be encoded.
pub fn encode(progress: &Progress) -> Result<[(&'static str, String); 2], StorageError> {
    let completed = serde_json::to_string(progress.completed_ids())
        .map_err(|err| StorageError::Serialization(err.to_string()))?;
    Ok([
        (SCORE_KEY, progress.score().to_string()),
        (COMPLETED_KEY, completed),
    ])
}

/// Decode raw entries. Both absent means nothing was ever saved.
///
/// A missing entry next to a present one decodes to its default.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the score is not a non-negative
/// decimal integer or the completed entry is not a JSON array of strings.
pub fn decode(
    score: Option<&str>,
    completed: Option<&str>,
) -> Result<Option<Progress>, StorageError> {
    if score.is_none() && completed.is_none() {
        return Ok(None);
    }

    let score = match score {
        Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
            StorageError::Serialization(format!("invalid {SCORE_KEY}: {raw:?}"))
        })?,
        None => 0,
    };

    let completed: Vec<ChallengeId> = match completed {
        Some(raw) => serde_json::from_str(raw).map_err(|err| {
            StorageError::Serialization(format!("invalid {COMPLETED_KEY}: {err}"))
        })?,
        None => Vec::new(),
    };

    Ok(Some(Progress::from_persisted(score, completed)))
}
