use std::sync::Arc;

use hunter_core::model::{Challenge, ChallengeId, Progress};
use hunter_core::progression::{is_last, next_in_catalog_after};
use hunter_core::{AwardOutcome, Catalog, award, is_unlocked, judge, next_challenge};
use storage::StorageError;
use tracing::{debug, info};

use crate::error::SessionError;
use crate::progress_store::ProgressStore;

use super::state::{
    AdvanceOutcome, AttemptFeedback, AttemptOutcome, Feedback, PlayState, RecordedAttempt,
    ResultOverlay, Screen, Verdict,
};
use super::view::{ChallengeListItem, ProgressSnapshot};

/// Owns the in-memory progress and drives menu/playing/result transitions.
///
/// Every first-time completion is written through the `ProgressStore`
/// immediately. A failed write is logged and reported in the attempt outcome;
/// the session keeps the updated progress in memory either way.
pub struct GameSession {
    catalog: Arc<Catalog>,
    store: ProgressStore,
    progress: Progress,
    screen: Screen,
    overlay: Option<ResultOverlay>,
    feedback: Option<Feedback>,
    attempts: u64,
}

impl GameSession {
    /// Load saved progress and open on the menu.
    pub async fn start(catalog: Arc<Catalog>, store: ProgressStore) -> Self {
        let progress = store.load().await;
        Self::with_progress(catalog, store, progress)
    }

    /// Build a session around already-loaded progress.
    #[must_use]
    pub fn with_progress(catalog: Arc<Catalog>, store: ProgressStore, progress: Progress) -> Self {
        Self {
            catalog,
            store,
            progress,
            screen: Screen::Menu,
            overlay: None,
            feedback: None,
            attempts: 0,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&ResultOverlay> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Every challenge in catalog order with its lock and completion state.
    #[must_use]
    pub fn list_challenges(&self) -> Vec<ChallengeListItem<'_>> {
        let completed = self.progress.completed_ids();
        self.catalog
            .iter()
            .enumerate()
            .map(|(index, challenge)| ChallengeListItem {
                index,
                challenge,
                unlocked: is_unlocked(&self.catalog, completed, index),
                completed: completed.contains(challenge.id()),
            })
            .collect()
    }

    #[must_use]
    pub fn current_progress(&self) -> ProgressSnapshot {
        ProgressSnapshot::new(&self.progress, self.catalog.len())
    }

    /// First challenge the player has not completed yet.
    #[must_use]
    pub fn suggested_challenge(&self) -> Option<&Challenge> {
        next_challenge(&self.catalog, self.progress.completed_ids())
    }

    #[must_use]
    pub fn current_challenge(&self) -> Option<&Challenge> {
        match &self.screen {
            Screen::Playing(play) => self.catalog.get(play.index),
            Screen::Menu => None,
        }
    }

    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        match &self.screen {
            Screen::Playing(play) => Some(play.draft()),
            Screen::Menu => None,
        }
    }

    /// The most recently revealed hint and its index.
    #[must_use]
    pub fn revealed_hint(&self) -> Option<(usize, &str)> {
        let Screen::Playing(play) = &self.screen else {
            return None;
        };
        let index = play.hint_index?;
        let hint = self.catalog.get(play.index)?.hint(index)?;
        Some((index, hint))
    }

    /// Start playing `id`, discarding any in-progress edits.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownChallenge` or `SessionError::Locked`
    /// without changing state.
    pub fn select_challenge(&mut self, id: &ChallengeId) -> Result<&Challenge, SessionError> {
        let index = self
            .catalog
            .position(id)
            .ok_or_else(|| SessionError::UnknownChallenge(id.clone()))?;
        if !is_unlocked(&self.catalog, self.progress.completed_ids(), index) {
            return Err(SessionError::Locked(id.clone()));
        }

        debug!(challenge = %id, "challenge selected");
        self.play(index);
        self.catalog
            .get(index)
            .ok_or_else(|| SessionError::UnknownChallenge(id.clone()))
    }

    /// Replace the editor contents.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPlaying` on the menu.
    pub fn update_draft(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        match &mut self.screen {
            Screen::Playing(play) => {
                play.draft = text.into();
                Ok(())
            }
            Screen::Menu => Err(SessionError::NotPlaying),
        }
    }

    /// Judge `text` against the current challenge's reference solution.
    ///
    /// On a pass the reward is applied (once per challenge), progress is saved
    /// and the result overlay opens. On a miss only the transient feedback
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPlaying` on the menu and
    /// `SessionError::ResultPending` while the overlay is open.
    pub async fn submit_attempt(&mut self, text: &str) -> Result<AttemptOutcome, SessionError> {
        let recorded = self.record_attempt(text)?;
        let persisted = if recorded.needs_save() {
            self.save_progress().await.is_ok()
        } else {
            true
        };
        Ok(AttemptOutcome {
            attempt: recorded.attempt,
            verdict: recorded.verdict,
            persisted,
        })
    }

    /// The in-memory half of `submit_attempt`: judge, award and update
    /// feedback and overlay without touching storage.
    ///
    /// Callers that cannot hold the session across an await use this and then
    /// save a snapshot of `progress()` through `progress_store()` when
    /// `needs_save()` is true.
    ///
    /// # Errors
    ///
    /// Same as `submit_attempt`.
    pub fn record_attempt(&mut self, text: &str) -> Result<RecordedAttempt, SessionError> {
        if self.overlay.is_some() {
            return Err(SessionError::ResultPending);
        }
        let Screen::Playing(play) = &mut self.screen else {
            return Err(SessionError::NotPlaying);
        };
        play.draft = text.to_string();
        let index = play.index;

        let catalog = Arc::clone(&self.catalog);
        let challenge = catalog.get(index).ok_or(SessionError::NotPlaying)?;

        self.attempts += 1;
        let attempt = self.attempts;

        if !judge(text, challenge.correct_code()) {
            debug!(challenge = %challenge.id(), attempt, "submission rejected");
            self.feedback = Some(Feedback {
                attempt,
                kind: AttemptFeedback::StillBuggy,
            });
            return Ok(RecordedAttempt {
                attempt,
                verdict: Verdict::Failed,
            });
        }

        let (next, outcome) = award(&self.progress, challenge);
        let kind = match outcome {
            AwardOutcome::Fixed { points } => {
                info!(challenge = %challenge.id(), points, score = next.score(), "bug fixed");
                self.progress = next;
                AttemptFeedback::Fixed { points }
            }
            AwardOutcome::Repeat => {
                info!(challenge = %challenge.id(), "challenge completed again");
                AttemptFeedback::Repeat
            }
        };

        self.feedback = Some(Feedback { attempt, kind });
        self.overlay = Some(ResultOverlay {
            challenge_id: challenge.id().clone(),
            award: outcome,
            is_last: is_last(&catalog, challenge.id()),
            catalog_complete: false,
        });

        Ok(RecordedAttempt {
            attempt,
            verdict: Verdict::Passed(outcome),
        })
    }

    /// Write the current in-memory progress through the store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails; the failure is already logged.
    pub async fn save_progress(&self) -> Result<(), StorageError> {
        self.store.save(&self.progress).await
    }

    /// Handle to the store, for callers that save snapshots themselves.
    #[must_use]
    pub fn progress_store(&self) -> ProgressStore {
        self.store.clone()
    }

    /// Clear the banner produced by `attempt`.
    ///
    /// Returns false if a newer attempt (or a state change) already replaced it.
    pub fn clear_feedback(&mut self, attempt: u64) -> bool {
        match self.feedback {
            Some(feedback) if feedback.attempt == attempt => {
                self.feedback = None;
                true
            }
            _ => false,
        }
    }

    /// Reveal the next hint for `challenge_id` and return its index.
    ///
    /// The first request reveals hint 0; later requests step forward and stay
    /// on the last hint once reached.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPlaying` on the menu or
    /// `SessionError::NotCurrent` if another challenge is being played.
    pub fn request_hint(&mut self, challenge_id: &ChallengeId) -> Result<usize, SessionError> {
        let Screen::Playing(play) = &mut self.screen else {
            return Err(SessionError::NotPlaying);
        };
        let challenge = self
            .catalog
            .get(play.index)
            .ok_or(SessionError::NotPlaying)?;
        if challenge.id() != challenge_id {
            return Err(SessionError::NotCurrent(challenge_id.clone()));
        }

        let last = challenge.hints().len().saturating_sub(1);
        let next = play.hint_index.map_or(0, |current| (current + 1).min(last));
        play.hint_index = Some(next);
        Ok(next)
    }

    /// Move from the result overlay to the next challenge in catalog order.
    ///
    /// On the last challenge the overlay stays open and is marked complete.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoResult` unless a passed result is showing.
    pub fn advance_to_next(&mut self) -> Result<AdvanceOutcome, SessionError> {
        let overlay = self.overlay.as_mut().ok_or(SessionError::NoResult)?;

        let Some(next) = next_in_catalog_after(&self.catalog, &overlay.challenge_id) else {
            overlay.catalog_complete = true;
            info!("all challenges complete");
            return Ok(AdvanceOutcome::CatalogComplete);
        };
        let next_id = next.id().clone();
        let index = self
            .catalog
            .position(&next_id)
            .ok_or(SessionError::NoResult)?;

        self.play(index);
        Ok(AdvanceOutcome::Advanced(next_id))
    }

    /// Go back to the menu, closing any overlay and dropping unsaved edits.
    pub fn return_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.overlay = None;
        self.feedback = None;
    }

    /// Wipe progress in memory and in storage, then return to the menu.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the saved entries cannot be removed;
    /// in-memory progress is reset regardless.
    pub async fn reset_progress(&mut self) -> Result<(), SessionError> {
        self.reset_in_memory();
        self.store.clear().await?;
        Ok(())
    }

    /// The in-memory half of `reset_progress`: back to the menu with default
    /// progress. Storage is left to the caller.
    pub fn reset_in_memory(&mut self) {
        self.return_to_menu();
        self.progress = Progress::default();
        info!("progress reset");
    }

    fn play(&mut self, index: usize) {
        let buggy_code = self
            .catalog
            .get(index)
            .map(Challenge::buggy_code)
            .unwrap_or_default();
        self.screen = Screen::Playing(PlayState::new(index, buggy_code));
        self.overlay = None;
        self.feedback = None;
    }
}
