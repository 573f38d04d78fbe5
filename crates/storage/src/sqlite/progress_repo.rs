use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use hunter_core::model::Progress;

use crate::progress_codec::{self, COMPLETED_KEY, SCORE_KEY};
use crate::repository::{ProgressRepository, StorageError};

use super::SqliteRepository;

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

impl SqliteRepository {
    async fn get_entry(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM kv_entries WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        row.map(|row| {
            row.try_get::<String, _>("value")
                .map_err(|err| StorageError::Serialization(err.to_string()))
        })
        .transpose()
    }
}

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn get_progress(&self) -> Result<Option<Progress>, StorageError> {
        let score = self.get_entry(SCORE_KEY).await?;
        let completed = self.get_entry(COMPLETED_KEY).await?;
        progress_codec::decode(score.as_deref(), completed.as_deref())
    }

    async fn save_progress(&self, progress: &Progress) -> Result<(), StorageError> {
        let encoded = progress_codec::encode(progress)?;
        let now = Utc::now();

        let mut tx = self.pool.begin().await.map_err(conn)?;
        for (key, value) in encoded {
            sqlx::query(
                r"
                INSERT INTO kv_entries (key, value, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                ",
            )
            .bind(key)
            .bind(value)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(conn)?;
        }
        tx.commit().await.map_err(conn)?;

        Ok(())
    }

    async fn clear_progress(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM kv_entries WHERE key IN (?1, ?2)")
            .bind(SCORE_KEY)
            .bind(COMPLETED_KEY)
            .execute(&self.pool)
            .await
            .map_err(conn)?;
        Ok(())
    }
}
