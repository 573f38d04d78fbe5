use hunter_core::level_for;
use hunter_core::model::{Challenge, Progress};

/// Menu entry for one challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeListItem<'a> {
    pub index: usize,
    pub challenge: &'a Challenge,
    pub unlocked: bool,
    pub completed: bool,
}

/// Header and summary numbers derived from progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub score: u32,
    pub level: u32,
    pub bugs_fixed: usize,
    pub total_challenges: usize,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn new(progress: &Progress, total_challenges: usize) -> Self {
        Self {
            score: progress.score(),
            level: level_for(progress.score()),
            bugs_fixed: progress.bugs_fixed(),
            total_challenges,
        }
    }

    #[must_use]
    pub fn all_complete(&self) -> bool {
        self.total_challenges > 0 && self.bugs_fixed >= self.total_challenges
    }
}
