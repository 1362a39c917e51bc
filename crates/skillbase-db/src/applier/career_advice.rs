//! Applier for the career-advice kind

use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::instrument;

use skillbase_core::entities::ResourceDraft;
use skillbase_core::error::DomainError;
use skillbase_core::traits::RepoResult;
use skillbase_core::value_objects::{EntityKind, Id};

use crate::repositories::map_db_error;

use super::{upsert_tag, KindApplier};

const KIND: EntityKind = EntityKind::CareerAdvice;

/// Applies approved changes to the career-advice tables
pub struct CareerAdviceApplier;

#[async_trait]
impl KindApplier for CareerAdviceApplier {
    #[instrument(skip(self, conn, seed_value))]
    async fn create(&self, conn: &mut PgConnection, seed_value: &str) -> RepoResult<Id> {
        // New articles start as draft; publication is a later edit.
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO career_advice (title)
            VALUES ($1)
            RETURNING id
            ",
        )
        .bind(seed_value)
        .fetch_one(conn)
        .await
        .map_err(map_db_error)?;

        Ok(Id::new(id))
    }

    #[instrument(skip(self, conn, value))]
    async fn patch_field(
        &self,
        conn: &mut PgConnection,
        id: Id,
        field: &str,
        value: &str,
    ) -> RepoResult<()> {
        let column = KIND.resolve_field(field).ok_or_else(|| DomainError::UnknownField {
            kind: KIND,
            field: field.to_string(),
        })?;

        let sql = format!(
            r"
            UPDATE career_advice
            SET {column} = $2, updated_at = NOW()
            WHERE id = $1
            ",
        );
        let result = sqlx::query(&sql)
            .bind(id.into_inner())
            .bind(value)
            .execute(conn)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EntityNotFound { kind: KIND, id });
        }

        Ok(())
    }

    #[instrument(skip(self, conn))]
    async fn attach_tag(&self, conn: &mut PgConnection, id: Id, name: &str) -> RepoResult<()> {
        let tag_id = upsert_tag(conn, name).await?;

        sqlx::query(
            r"
            INSERT INTO career_advice_tags (advice_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(id.into_inner())
        .bind(tag_id)
        .execute(conn)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, _conn, _draft))]
    async fn attach_resource(
        &self,
        _conn: &mut PgConnection,
        _id: Id,
        _draft: &ResourceDraft,
    ) -> RepoResult<()> {
        // Resources are owned by skills only.
        Err(DomainError::UnknownField {
            kind: KIND,
            field: "resource".to_string(),
        })
    }
}
