use std::time::Duration;

use hunter_core::AwardOutcome;
use hunter_core::model::ChallengeId;

/// How long the "bug still present" banner stays up.
pub const FAILURE_BANNER_DELAY: Duration = Duration::from_millis(2000);

/// Pause between the "bug fixed" banner and the completion overlay.
pub const SUCCESS_OVERLAY_DELAY: Duration = Duration::from_millis(1500);

/// Primary view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing(PlayState),
}

/// Editor state for the challenge being played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayState {
    pub(crate) index: usize,
    pub(crate) draft: String,
    pub(crate) hint_index: Option<usize>,
}

impl PlayState {
    pub(crate) fn new(index: usize, buggy_code: &str) -> Self {
        Self {
            index,
            draft: buggy_code.to_string(),
            hint_index: None,
        }
    }

    /// Catalog index of the challenge.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Index of the most recently revealed hint, if any.
    #[must_use]
    pub fn hint_index(&self) -> Option<usize> {
        self.hint_index
    }
}

/// Transient banner shown after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptFeedback {
    Fixed { points: u32 },
    Repeat,
    StillBuggy,
}

impl AttemptFeedback {
    #[must_use]
    pub fn is_success(self) -> bool {
        !matches!(self, AttemptFeedback::StillBuggy)
    }
}

/// Feedback tagged with the attempt that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub attempt: u64,
    pub kind: AttemptFeedback,
}

/// Completion overlay for a passed challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultOverlay {
    pub challenge_id: ChallengeId,
    pub award: AwardOutcome,
    pub is_last: bool,
    /// Set once "advance" is requested on the last challenge.
    pub catalog_complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed(AwardOutcome),
    Failed,
}

/// Attempt applied in memory by `GameSession::record_attempt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedAttempt {
    pub attempt: u64,
    pub verdict: Verdict,
}

impl RecordedAttempt {
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(self.verdict, Verdict::Passed(_))
    }

    /// True for a first-time completion, the only attempt that changes progress.
    #[must_use]
    pub fn needs_save(&self) -> bool {
        matches!(self.verdict, Verdict::Passed(AwardOutcome::Fixed { .. }))
    }
}

/// Result of `GameSession::submit_attempt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptOutcome {
    pub attempt: u64,
    pub verdict: Verdict,
    /// False when a first-time completion could not be written to storage.
    pub persisted: bool,
}

impl AttemptOutcome {
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(self.verdict, Verdict::Passed(_))
    }
}

/// Result of `GameSession::advance_to_next`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced(ChallengeId),
    CatalogComplete,
}
