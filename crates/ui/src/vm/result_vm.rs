use hunter_core::AwardOutcome;
use hunter_core::model::Challenge;
use services::{AttemptFeedback, ResultOverlay};

/// Banner shown under the editor right after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub success: bool,
    pub title: String,
    pub message: String,
}

impl From<AttemptFeedback> for FeedbackVm {
    fn from(kind: AttemptFeedback) -> Self {
        match kind {
            AttemptFeedback::Fixed { points } => Self {
                success: true,
                title: "Bug Fixed! 🎉".to_string(),
                message: format!("Great work! You earned {points} points."),
            },
            AttemptFeedback::Repeat => Self {
                success: true,
                title: "Bug Fixed! 🎉".to_string(),
                message: "Challenge completed again! Great practice!".to_string(),
            },
            AttemptFeedback::StillBuggy => Self {
                success: false,
                title: "Bug Still Present 🐛".to_string(),
                message: "Keep trying! Check your syntax and logic carefully.".to_string(),
            },
        }
    }
}

impl FeedbackVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.success {
            "feedback feedback--success"
        } else {
            "feedback feedback--failure"
        }
    }
}

/// Contents of the completion modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub title: String,
    pub reward: String,
    pub explanation: String,
    pub show_next: bool,
    pub catalog_complete: bool,
}

impl CompletionVm {
    #[must_use]
    pub fn new(overlay: &ResultOverlay, challenge: &Challenge) -> Self {
        let reward = match overlay.award {
            AwardOutcome::Fixed { points } => format!("+{points} Points Earned"),
            AwardOutcome::Repeat => "Already completed, no new points".to_string(),
        };
        let finished = overlay.is_last || overlay.catalog_complete;
        Self {
            title: challenge.title().to_string(),
            reward,
            explanation: challenge.explanation().to_string(),
            show_next: !finished,
            catalog_complete: finished,
        }
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!("You successfully fixed the \"{}\" challenge", self.title)
    }
}
