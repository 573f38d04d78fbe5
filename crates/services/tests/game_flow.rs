use std::sync::Arc;

use async_trait::async_trait;
use hunter_core::model::{Category, ChallengeDraft, ChallengeId, Difficulty, Progress};
use hunter_core::{Catalog, level_for, next_challenge};
use services::{AppServices, AttemptFeedback, ProgressStore, Verdict};
use storage::progress_codec::COMPLETED_KEY;
use storage::repository::{InMemoryRepository, ProgressRepository, Storage, StorageError};

fn draft(id: &str, points: u32) -> ChallengeDraft {
    ChallengeDraft {
        id: ChallengeId::new(id),
        title: format!("Bug {id}"),
        description: "Fix the snippet.".into(),
        category: Category::Syntax,
        difficulty: Difficulty::Easy,
        buggy_code: format!("console.log({id})"),
        correct_code: format!("console.log({id});"),
        hints: vec!["Check the line ending".into()],
        explanation: "Statements end with a semicolon.".into(),
        points,
        highlighted_lines: vec![1],
    }
}

fn small_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::from_drafts(vec![draft("1", 50), draft("2", 75), draft("3", 100)]).unwrap(),
    )
}

#[tokio::test]
async fn fresh_player_completes_first_two_and_reloads() {
    let repo = InMemoryRepository::new();
    let storage = Storage {
        progress: Arc::new(repo.clone()),
    };
    let services = AppServices::with_catalog(small_catalog(), &storage);

    let mut session = services.start_session().await;
    assert_eq!(session.progress(), &Progress::default());

    for (id, fix) in [("1", "console.log(1);"), ("2", "  console.log(2);\n")] {
        session.select_challenge(&ChallengeId::from(id)).unwrap();
        let outcome = session.submit_attempt(fix).await.unwrap();
        assert!(outcome.passed(), "{id} should pass");
        session.return_to_menu();
    }

    let snapshot = session.current_progress();
    assert_eq!(snapshot.score, 125);
    assert_eq!(snapshot.level, 1);
    assert_eq!(level_for(snapshot.score), 1);
    let next = next_challenge(session.catalog(), session.progress().completed_ids()).unwrap();
    assert_eq!(next.id().as_str(), "3");

    let reloaded = services.start_session().await;
    assert_eq!(reloaded.progress(), session.progress());
    assert_eq!(
        repo.get_raw(COMPLETED_KEY).unwrap().as_deref(),
        Some(r#"["1","2"]"#)
    );
}

#[tokio::test]
async fn corrupt_completed_slot_starts_fresh() {
    let repo = InMemoryRepository::new();
    repo.put_raw(storage::progress_codec::SCORE_KEY, "125").unwrap();
    repo.put_raw(COMPLETED_KEY, "this is not json").unwrap();
    let storage = Storage {
        progress: Arc::new(repo),
    };

    let session = AppServices::with_catalog(small_catalog(), &storage)
        .start_session()
        .await;
    assert_eq!(session.progress(), &Progress::default());
    assert!(session.list_challenges()[0].unlocked);
    assert!(!session.list_challenges()[1].unlocked);
}

struct ReadOnlyRepository;

#[async_trait]
impl ProgressRepository for ReadOnlyRepository {
    async fn get_progress(&self) -> Result<Option<Progress>, StorageError> {
        Ok(None)
    }

    async fn save_progress(&self, _progress: &Progress) -> Result<(), StorageError> {
        Err(StorageError::Connection("disk full".into()))
    }

    async fn clear_progress(&self) -> Result<(), StorageError> {
        Err(StorageError::Connection("disk full".into()))
    }
}

#[tokio::test]
async fn write_failure_keeps_playing_in_memory() {
    let store = ProgressStore::new(Arc::new(ReadOnlyRepository));
    let mut session = services::GameSession::start(small_catalog(), store).await;

    session.select_challenge(&ChallengeId::from("1")).unwrap();
    let outcome = session.submit_attempt("console.log(1);").await.unwrap();
    assert!(matches!(outcome.verdict, Verdict::Passed(_)));
    assert!(!outcome.persisted);
    assert_eq!(
        session.feedback().map(|f| f.kind),
        Some(AttemptFeedback::Fixed { points: 50 })
    );
    assert_eq!(session.current_progress().score, 50);

    // Unlock chain follows in-memory progress.
    session.advance_to_next().unwrap();
    assert_eq!(session.current_challenge().unwrap().id().as_str(), "2");
}

#[tokio::test]
async fn builtin_catalog_first_fix_scores_fifty() {
    let services = AppServices::from_storage(&Storage::in_memory()).unwrap();
    let mut session = services.start_session().await;
    assert_eq!(session.current_progress().total_challenges, 32);

    let first = session.catalog().get(0).unwrap().clone();
    session.select_challenge(first.id()).unwrap();
    let outcome = session.submit_attempt(first.correct_code()).await.unwrap();
    assert!(outcome.passed());
    assert_eq!(session.current_progress().score, first.points());
    assert!(session.list_challenges()[1].unlocked);
}
