//! The ordered challenge catalog.
//!
//! Catalog order is significant: it is both the difficulty progression and the
//! unlock chain. The built-in catalog ships as JSON inside the binary and is
//! parsed once on first use.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{Challenge, ChallengeDraft, ChallengeError, ChallengeId};

const BUILTIN_JSON: &str = include_str!("../data/challenges.json");

static BUILTIN: Lazy<Result<Catalog, CatalogError>> = Lazy::new(|| Catalog::from_json(BUILTIN_JSON));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no challenges")]
    Empty,

    #[error("duplicate challenge id: {0}")]
    DuplicateId(ChallengeId),

    #[error("invalid catalog data: {0}")]
    Parse(String),

    #[error(transparent)]
    Challenge(#[from] ChallengeError),
}

#[derive(Deserialize)]
struct CatalogFile {
    challenges: Vec<ChallengeDraft>,
}

/// Immutable, ordered list of challenges with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    challenges: Vec<Challenge>,
}

impl Catalog {
    /// Build a catalog from drafts, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list, `CatalogError::DuplicateId`
    /// if an id repeats, or `CatalogError::Challenge` if a draft fails validation.
    pub fn from_drafts(drafts: Vec<ChallengeDraft>) -> Result<Self, CatalogError> {
        if drafts.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(drafts.len());
        let mut challenges = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let challenge = draft.validate()?;
            if !seen.insert(challenge.id().clone()) {
                return Err(CatalogError::DuplicateId(challenge.id().clone()));
            }
            challenges.push(challenge);
        }

        Ok(Self { challenges })
    }

    /// Parse a catalog from its JSON form (`{"challenges": [...]}`).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, or any validation error
    /// from [`Catalog::from_drafts`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Self::from_drafts(file.challenges)
    }

    /// The catalog bundled with the game.
    ///
    /// # Errors
    ///
    /// Returns the load error if the bundled data is invalid.
    pub fn builtin() -> Result<&'static Catalog, CatalogError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn iter(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Challenge> {
        self.challenges.get(index)
    }

    #[must_use]
    pub fn find(&self, id: &ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|challenge| challenge.id() == id)
    }

    /// Catalog index of `id`.
    #[must_use]
    pub fn position(&self, id: &ChallengeId) -> Option<usize> {
        self.challenges.iter().position(|challenge| challenge.id() == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Challenge;
    type IntoIter = std::slice::Iter<'a, Challenge>;

    fn into_iter(self) -> Self::IntoIter {
        self.challenges.iter()
    }
}
