//! Applier for the skill kind

use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::instrument;

use skillbase_core::entities::ResourceDraft;
use skillbase_core::error::DomainError;
use skillbase_core::traits::RepoResult;
use skillbase_core::value_objects::{EntityKind, Id};

use crate::repositories::map_db_error;

use super::{upsert_tag, KindApplier};

const KIND: EntityKind = EntityKind::Skill;

/// Applies approved changes to the skills tables
pub struct SkillApplier;

#[async_trait]
impl KindApplier for SkillApplier {
    #[instrument(skip(self, conn, seed_value))]
    async fn create(&self, conn: &mut PgConnection, seed_value: &str) -> RepoResult<Id> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO skills (name)
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
        // Resolve to the canonical 'static column name; only that resolved
        // name ever reaches the statement text.
        let column = KIND.resolve_field(field).ok_or_else(|| DomainError::UnknownField {
            kind: KIND,
            field: field.to_string(),
        })?;

        let sql = format!(
            r"
            UPDATE skills
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
            INSERT INTO skill_tags (skill_id, tag_id)
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

    #[instrument(skip(self, conn, draft))]
    async fn attach_resource(
        &self,
        conn: &mut PgConnection,
        id: Id,
        draft: &ResourceDraft,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO resources (skill_id, title, description, resource_type, url, is_paid, status)
            VALUES ($1, $2, $3, $4, $5, $6, 'approved')
            ",
        )
        .bind(id.into_inner())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.resource_type)
        .bind(&draft.url)
        .bind(draft.is_paid)
        .execute(conn)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
