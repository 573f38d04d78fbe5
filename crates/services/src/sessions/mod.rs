mod service;
mod state;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use service::GameSession;
pub use state::{
    AdvanceOutcome, AttemptFeedback, AttemptOutcome, FAILURE_BANNER_DELAY, Feedback,
    PlayState, RecordedAttempt, ResultOverlay, SUCCESS_OVERLAY_DELAY, Screen, Verdict,
};
pub use view::{ChallengeListItem, ProgressSnapshot};
