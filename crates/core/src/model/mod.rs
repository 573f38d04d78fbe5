pub(crate) mod challenge;
mod ids;
mod progress;

pub use challenge::{Category, Challenge, ChallengeDraft, ChallengeError, Difficulty};
pub use ids::ChallengeId;
pub use progress::Progress;
