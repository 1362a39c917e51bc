//! Transaction-scoped change-record operations
//!
//! The moderation service owns the approval transaction; these helpers run
//! inside it against the borrowed connection. The `FOR UPDATE` reads are what
//! serialize two approvals racing on the same record: the loser blocks until
//! the winner commits and then observes a non-pending status.

use sqlx::PgConnection;
use uuid::Uuid;

use skillbase_core::{ChangeRecord, Id, NewChange, RepoResult};

use crate::models::ChangeRecordModel;

use super::error::map_db_error;

const SELECT_COLUMNS: &str = "id, entity_kind, entity_id, field_name, current_value, \
     proposed_value, proposer_id, is_new_entity, batch_id, status, created_at, updated_at";

/// Load a change record with a row lock, blocking concurrent approvals
pub async fn find_for_update(
    conn: &mut PgConnection,
    id: Id,
) -> RepoResult<Option<ChangeRecord>> {
    let sql = format!(
        r"
        SELECT {SELECT_COLUMNS}
        FROM change_records
        WHERE id = $1
        FOR UPDATE
        ",
    );
    let result = sqlx::query_as::<_, ChangeRecordModel>(&sql)
        .bind(id.into_inner())
        .fetch_optional(conn)
        .await
        .map_err(map_db_error)?;

    result.map(ChangeRecord::try_from).transpose()
}

/// Lock every pending record of one submission bundle
pub async fn lock_batch(conn: &mut PgConnection, batch_id: Uuid) -> RepoResult<Vec<ChangeRecord>> {
    let sql = format!(
        r"
        SELECT {SELECT_COLUMNS}
        FROM change_records
        WHERE batch_id = $1 AND status = 'pending'
        ORDER BY id
        FOR UPDATE
        ",
    );
    let rows = sqlx::query_as::<_, ChangeRecordModel>(&sql)
        .bind(batch_id)
        .fetch_all(conn)
        .await
        .map_err(map_db_error)?;

    rows.into_iter().map(ChangeRecord::try_from).collect()
}

/// Transition a record to approved inside the caller's transaction
pub async fn mark_approved(conn: &mut PgConnection, id: Id) -> RepoResult<()> {
    sqlx::query(
        r"
        UPDATE change_records
        SET status = 'approved', updated_at = NOW()
        WHERE id = $1
        ",
    )
    .bind(id.into_inner())
    .execute(conn)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

/// Insert a staged change, returning the assigned id
pub async fn insert_change(conn: &mut PgConnection, change: &NewChange) -> RepoResult<Id> {
    let id = sqlx::query_scalar::<_, i64>(
        r"
        INSERT INTO change_records
            (entity_kind, entity_id, field_name, current_value, proposed_value,
             proposer_id, is_new_entity, batch_id, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending')
        RETURNING id
        ",
    )
    .bind(change.entity_kind.as_str())
    .bind(change.entity_id.map(Id::into_inner))
    .bind(&change.field_name)
    .bind(&change.current_value)
    .bind(&change.proposed_value)
    .bind(change.proposer_id.into_inner())
    .bind(change.is_new_entity)
    .bind(change.batch_id)
    .fetch_one(conn)
    .await
    .map_err(map_db_error)?;

    Ok(Id::new(id))
}
