//! Level, unlock and reward rules.

use crate::catalog::Catalog;
use crate::model::{Challenge, ChallengeId, Progress};

/// Points needed per level step.
pub const POINTS_PER_LEVEL: u32 = 200;

/// Result of applying a successful submission to progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardOutcome {
    /// First completion; `points` were added to the score.
    Fixed { points: u32 },
    /// The challenge was already complete; nothing changed.
    Repeat,
}

impl AwardOutcome {
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            AwardOutcome::Fixed { points } => points,
            AwardOutcome::Repeat => 0,
        }
    }
}

/// `floor(score / 200) + 1`.
#[must_use]
pub fn level_for(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// The first challenge is always open; any other needs its predecessor done.
#[must_use]
pub fn is_unlocked(catalog: &Catalog, completed_ids: &[ChallengeId], index: usize) -> bool {
    if index >= catalog.len() {
        return false;
    }
    if index == 0 {
        return true;
    }
    catalog
        .get(index - 1)
        .is_some_and(|previous| completed_ids.contains(previous.id()))
}

/// First challenge in catalog order that is not yet completed.
#[must_use]
pub fn next_challenge<'a>(catalog: &'a Catalog, completed_ids: &[ChallengeId]) -> Option<&'a Challenge> {
    catalog
        .iter()
        .find(|challenge| !completed_ids.contains(challenge.id()))
}

/// Challenge immediately after `id` in catalog order, regardless of completion.
#[must_use]
pub fn next_in_catalog_after<'a>(catalog: &'a Catalog, id: &ChallengeId) -> Option<&'a Challenge> {
    catalog
        .position(id)
        .and_then(|index| catalog.get(index + 1))
}

#[must_use]
pub fn is_last(catalog: &Catalog, id: &ChallengeId) -> bool {
    catalog
        .position(id)
        .is_some_and(|index| index + 1 == catalog.len())
}

/// Credit `challenge` once. Repeats return `progress` unchanged.
#[must_use]
pub fn award(progress: &Progress, challenge: &Challenge) -> (Progress, AwardOutcome) {
    if progress.is_completed(challenge.id()) {
        return (progress.clone(), AwardOutcome::Repeat);
    }
    let points = challenge.points();
    (
        progress.with_completion(challenge.id(), points),
        AwardOutcome::Fixed { points },
    )
}
