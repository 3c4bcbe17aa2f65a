use crate::error::Result as DbErrorResult;

use sp_core::{CachePartition, IdentityId};

use chrono::Utc;
use serde_json::{from_str, to_string};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Cache partitions of one named store, keyed by identity id.
///
/// Each collection is stored as a JSON text column; a partition row is always
/// written as a whole so a reader never sees a mix of two writes.
#[derive(Clone)]
pub struct PartitionRepository {
    pool: SqlitePool,
    store_name: String,
}

impl PartitionRepository {
    pub fn new(pool: SqlitePool, store_name: impl Into<String>) -> Self {
        Self {
            pool,
            store_name: store_name.into(),
        }
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub async fn find(&self, identity_id: &IdentityId) -> DbErrorResult<Option<CachePartition>> {
        let row = sqlx::query(
            r#"
              SELECT benefits, offers, medicines, hidden_benefit_ids
              FROM cache_partitions
              WHERE store_name = ? AND identity_id = ?
              "#,
        )
        .bind(&self.store_name)
        .bind(identity_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<(IdentityId, CachePartition)>> {
        let rows = sqlx::query(
            r#"
              SELECT identity_id, benefits, offers, medicines, hidden_benefit_ids
              FROM cache_partitions
              WHERE store_name = ?
              ORDER BY identity_id
              "#,
        )
        .bind(&self.store_name)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let identity_id: String = row.try_get("identity_id")?;
                Ok((IdentityId::new(identity_id), Self::map_row(row)?))
            })
            .collect()
    }

    pub async fn upsert(
        &self,
        identity_id: &IdentityId,
        partition: &CachePartition,
    ) -> DbErrorResult<()> {
        let benefits = to_string(&partition.benefits)?;
        let offers = to_string(&partition.offers)?;
        let medicines = to_string(&partition.medicines)?;
        let hidden = to_string(&partition.hidden_benefit_ids)?;
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
              INSERT INTO cache_partitions
                  (store_name, identity_id, benefits, offers, medicines, hidden_benefit_ids, updated_at)
              VALUES (?, ?, ?, ?, ?, ?, ?)
              ON CONFLICT(store_name, identity_id) DO UPDATE SET
                  benefits = excluded.benefits,
                  offers = excluded.offers,
                  medicines = excluded.medicines,
                  hidden_benefit_ids = excluded.hidden_benefit_ids,
                  updated_at = excluded.updated_at
              "#,
        )
        .bind(&self.store_name)
        .bind(identity_id.as_str())
        .bind(benefits)
        .bind(offers)
        .bind(medicines)
        .bind(hidden)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns whether a partition was deleted.
    pub async fn delete(&self, identity_id: &IdentityId) -> DbErrorResult<bool> {
        let result =
            sqlx::query("DELETE FROM cache_partitions WHERE store_name = ? AND identity_id = ?")
                .bind(&self.store_name)
                .bind(identity_id.as_str())
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<CachePartition> {
        let benefits: String = row.try_get("benefits")?;
        let offers: String = row.try_get("offers")?;
        let medicines: String = row.try_get("medicines")?;
        let hidden: String = row.try_get("hidden_benefit_ids")?;

        Ok(CachePartition {
            benefits: from_str(&benefits)?,
            offers: from_str(&offers)?,
            medicines: from_str(&medicines)?,
            hidden_benefit_ids: from_str(&hidden)?,
        })
    }
}
