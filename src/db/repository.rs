//! Key-value repository over the `kv_store` table.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::RevisionInfo;

/// Repository for named storage entries.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read the raw value stored under `key`.
    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get("value")))
    }

    /// Write `value` under `key`, bumping its revision. Returns the new revision.
    pub async fn put(&self, key: &str, value: &str) -> Result<i64, AppError> {
        let now = Utc::now().to_rfc3339();
        let row = sqlx::query(
            "INSERT INTO kv_store (key, value, revision, updated_at) VALUES (?, ?, 1, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, \
             revision = kv_store.revision + 1, updated_at = excluded.updated_at \
             RETURNING revision",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.get("revision"))
    }

    /// Get the current revision ID of `key`, 0 when it has never been written.
    pub async fn get_revision_id(&self, key: &str) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT revision FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get("revision")).unwrap_or(0))
    }

    /// Get revision info for `key`.
    pub async fn get_revision_info(&self, key: &str) -> Result<RevisionInfo, AppError> {
        let row = sqlx::query("SELECT revision, updated_at FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(match row {
            Some(row) => RevisionInfo {
                revision_id: row.get("revision"),
                updated_at: Some(row.get("updated_at")),
            },
            None => RevisionInfo {
                revision_id: 0,
                updated_at: None,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn repo() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("kv.sqlite"))
            .await
            .expect("Failed to init DB");
        (Repository::new(pool), temp_dir)
    }

    #[tokio::test]
    async fn test_put_get_bumps_revision() {
        let (repo, _dir) = repo().await;

        assert_eq!(repo.get("k").await.unwrap(), None);
        assert_eq!(repo.get_revision_id("k").await.unwrap(), 0);

        assert_eq!(repo.put("k", "{\"a\":1}").await.unwrap(), 1);
        assert_eq!(repo.put("k", "{\"a\":2}").await.unwrap(), 2);
        assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("{\"a\":2}"));

        let info = repo.get_revision_info("k").await.unwrap();
        assert_eq!(info.revision_id, 2);
        assert!(info.updated_at.is_some());
    }
}
