use hunter_core::model::{ChallengeId, Progress};
use storage::progress_codec::{COMPLETED_KEY, SCORE_KEY};
use storage::repository::{ProgressRepository, StorageError};
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_roundtrip_persists_progress() {
    let repo = connect("memdb_progress_roundtrip").await;
    assert!(repo.get_progress().await.unwrap().is_none());

    let progress = Progress::from_persisted(125, [ChallengeId::from("1"), ChallengeId::from("2")]);
    repo.save_progress(&progress).await.unwrap();

    let fetched = repo.get_progress().await.unwrap().expect("saved progress");
    assert_eq!(fetched, progress);
}

#[tokio::test]
async fn sqlite_save_overwrites_previous_entries() {
    let repo = connect("memdb_progress_overwrite").await;

    repo.save_progress(&Progress::from_persisted(50, [ChallengeId::from("1")]))
        .await
        .unwrap();
    let later = Progress::from_persisted(
        125,
        [ChallengeId::from("1"), ChallengeId::from("2")],
    );
    repo.save_progress(&later).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kv_entries")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(repo.get_progress().await.unwrap(), Some(later));
}

#[tokio::test]
async fn sqlite_corrupt_entry_is_reported() {
    let repo = connect("memdb_progress_corrupt").await;

    for (key, value) in [(SCORE_KEY, "75"), (COMPLETED_KEY, "definitely not json")] {
        sqlx::query("INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, '')")
            .bind(key)
            .bind(value)
            .execute(repo.pool())
            .await
            .unwrap();
    }

    let err = repo.get_progress().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)), "{err:?}");
}

#[tokio::test]
async fn sqlite_clear_and_remigrate() {
    let repo = connect("memdb_progress_clear").await;
    repo.save_progress(&Progress::from_persisted(10, []))
        .await
        .unwrap();

    repo.clear_progress().await.unwrap();
    assert!(repo.get_progress().await.unwrap().is_none());

    // Migrations are idempotent.
    repo.migrate().await.unwrap();
    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(applied, 1);
}
