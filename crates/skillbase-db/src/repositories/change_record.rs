//! PostgreSQL implementation of ChangeRecordRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use skillbase_core::entities::{ChangeRecord, NewChange};
use skillbase_core::traits::{ChangeRecordRepository, PendingFilter, RepoResult};
use skillbase_core::value_objects::Id;

use crate::models::ChangeRecordModel;

use super::changes_tx;
use super::error::map_db_error;

/// PostgreSQL implementation of ChangeRecordRepository
#[derive(Clone)]
pub struct PgChangeRecordRepository {
    pool: PgPool,
}

impl PgChangeRecordRepository {
    /// Create a new PgChangeRecordRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChangeRecordRepository for PgChangeRecordRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ChangeRecord>> {
        let result = sqlx::query_as::<_, ChangeRecordModel>(
            r"
            SELECT id, entity_kind, entity_id, field_name, current_value, proposed_value,
                   proposer_id, is_new_entity, batch_id, status, created_at, updated_at
            FROM change_records
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ChangeRecord::try_from).transpose()
    }

    #[instrument(skip(self, change))]
    async fn stage(&self, change: &NewChange) -> RepoResult<Id> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        changes_tx::insert_change(&mut conn, change).await
    }

    #[instrument(skip(self, changes), fields(count = changes.len()))]
    async fn stage_bundle(&self, changes: &[NewChange]) -> RepoResult<Vec<Id>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let mut ids = Vec::with_capacity(changes.len());
        for change in changes {
            ids.push(changes_tx::insert_change(&mut tx, change).await?);
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(ids)
    }

    #[instrument(skip(self))]
    async fn list_pending(&self, filter: &PendingFilter) -> RepoResult<Vec<ChangeRecord>> {
        // NULL binds disable the corresponding filter clause. Without an
        // entity_id, new-entity bundle records only appear when requested.
        let rows = sqlx::query_as::<_, ChangeRecordModel>(
            r"
            SELECT id, entity_kind, entity_id, field_name, current_value, proposed_value,
                   proposer_id, is_new_entity, batch_id, status, created_at, updated_at
            FROM change_records
            WHERE status = 'pending'
              AND ($1::TEXT IS NULL OR entity_kind = $1)
              AND ($2::BIGINT IS NULL OR entity_id = $2)
              AND (($2::BIGINT IS NOT NULL) OR $3 OR NOT is_new_entity)
            ORDER BY created_at, id
            ",
        )
        .bind(filter.kind.map(|k| k.as_str()))
        .bind(filter.entity_id.map(Id::into_inner))
        .bind(filter.include_new)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(ChangeRecord::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn mark_rejected(&self, id: Id) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE change_records
            SET status = 'rejected', updated_at = NOW()
            WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgChangeRecordRepository>();
    }
}
