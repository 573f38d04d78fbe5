use crate::model::ids::ChallengeId;

/// Persisted score and completed-challenge set.
///
/// `completed_ids` behaves as a set: membership is what matters, but
/// insertion order is kept so the persisted array stays stable between saves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    completed_ids: Vec<ChallengeId>,
}

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate progress from persisted storage, dropping repeated ids.
    #[must_use]
    pub fn from_persisted(score: u32, completed_ids: impl IntoIterator<Item = ChallengeId>) -> Self {
        let mut unique: Vec<ChallengeId> = Vec::new();
        for id in completed_ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self {
            score,
            completed_ids: unique,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn completed_ids(&self) -> &[ChallengeId] {
        &self.completed_ids
    }

    #[must_use]
    pub fn is_completed(&self, id: &ChallengeId) -> bool {
        self.completed_ids.contains(id)
    }

    /// Number of distinct challenges fixed so far.
    #[must_use]
    pub fn bugs_fixed(&self) -> usize {
        self.completed_ids.len()
    }

    /// Returns a copy with `id` marked complete and `points` added.
    ///
    /// Callers are expected to check `is_completed` first; a repeated id is
    /// not inserted twice, but the points are still added.
    #[must_use]
    pub(crate) fn with_completion(&self, id: &ChallengeId, points: u32) -> Self {
        let mut next = self.clone();
        next.score = next.score.saturating_add(points);
        if !next.completed_ids.contains(id) {
            next.completed_ids.push(id.clone());
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let progress = Progress::new();
        assert_eq!(progress.score(), 0);
        assert!(progress.completed_ids().is_empty());
        assert_eq!(progress.bugs_fixed(), 0);
    }

    #[test]
    fn from_persisted_collapses_duplicates_in_order() {
        let progress = Progress::from_persisted(
            125,
            ["2", "1", "2", "3", "1"].into_iter().map(ChallengeId::from),
        );
        let ids: Vec<&str> = progress.completed_ids().iter().map(ChallengeId::as_str).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
        assert_eq!(progress.score(), 125);
        assert!(progress.is_completed(&ChallengeId::from("3")));
        assert!(!progress.is_completed(&ChallengeId::from("4")));
    }

    #[test]
    fn with_completion_saturates_score() {
        let progress = Progress::from_persisted(u32::MAX - 1, []);
        let next = progress.with_completion(&ChallengeId::from("1"), 50);
        assert_eq!(next.score(), u32::MAX);
        assert_eq!(next.bugs_fixed(), 1);
    }
}
