#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_store;
pub mod sessions;

pub use app_services::AppServices;
pub use error::{AppServicesError, SessionError};
pub use progress_store::ProgressStore;

pub use sessions::{
    AdvanceOutcome, AttemptFeedback, AttemptOutcome, ChallengeListItem, FAILURE_BANNER_DELAY,
    Feedback, GameSession, PlayState, ProgressSnapshot, RecordedAttempt, ResultOverlay,
    SUCCESS_OVERLAY_DELAY, Screen, Verdict,
};
