use crate::error::Result as DbErrorResult;

use chrono::Utc;
use sqlx::{Row, SqlitePool};

/// String key/value entries that live only on this device.
#[derive(Clone)]
pub struct LocalEntryRepository {
    pool: SqlitePool,
}

impl LocalEntryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, key: &str) -> DbErrorResult<Option<String>> {
        let row = sqlx::query("SELECT value FROM local_entries WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(match row {
            Some(row) => Some(row.try_get("value")?),
            None => None,
        })
    }

    pub async fn set(&self, key: &str, value: &str) -> DbErrorResult<()> {
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
              INSERT INTO local_entries (key, value, updated_at)
              VALUES (?, ?, ?)
              ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
              "#,
        )
        .bind(key)
        .bind(value)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns whether an entry was removed.
    pub async fn remove(&self, key: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM local_entries WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
