//! PostgreSQL implementation of CatalogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use skillbase_core::entities::{CareerAdvice, Resource, Skill};
use skillbase_core::traits::{CatalogRepository, RepoResult};
use skillbase_core::value_objects::Id;

use crate::models::{CareerAdviceModel, ResourceModel, SkillModel};

use super::error::map_db_error;

const SKILL_COLUMNS: &str =
    "id, name, description, category, difficulty_level, created_at, updated_at";

const ADVICE_COLUMNS: &str =
    "id, title, industry, career_stage, content, status, author_id, created_at, updated_at";

const RESOURCE_COLUMNS: &str =
    "id, skill_id, title, description, resource_type, url, is_paid, status, created_at";

/// PostgreSQL implementation of CatalogRepository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    /// Create a new PgCatalogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    #[instrument(skip(self))]
    async fn list_skills(&self) -> RepoResult<Vec<Skill>> {
        let sql = format!(
            r"
            SELECT {SKILL_COLUMNS}
            FROM skills
            ORDER BY name
            ",
        );
        let rows = sqlx::query_as::<_, SkillModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_skill_resources(&self, skill_id: Id) -> RepoResult<Vec<Resource>> {
        let sql = format!(
            r"
            SELECT {RESOURCE_COLUMNS}
            FROM resources
            WHERE skill_id = $1 AND status = 'approved'
            ORDER BY title
            ",
        );
        let rows = sqlx::query_as::<_, ResourceModel>(&sql)
            .bind(skill_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(Resource::try_from).collect()
    }

    #[instrument(skip(self), fields(count = skill_ids.len()))]
    async fn list_resources_for_skills(&self, skill_ids: &[Id]) -> RepoResult<Vec<Resource>> {
        if skill_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = skill_ids.iter().copied().map(Id::into_inner).collect();
        let sql = format!(
            r"
            SELECT {RESOURCE_COLUMNS}
            FROM resources
            WHERE skill_id = ANY($1) AND status = 'approved'
            ORDER BY skill_id, title
            ",
        );
        let rows = sqlx::query_as::<_, ResourceModel>(&sql)
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(Resource::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn list_published_advice(&self) -> RepoResult<Vec<CareerAdvice>> {
        let sql = format!(
            r"
            SELECT {ADVICE_COLUMNS}
            FROM career_advice
            WHERE status = 'published'
            ORDER BY created_at DESC
            ",
        );
        let rows = sqlx::query_as::<_, CareerAdviceModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(CareerAdvice::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn search_skills(&self, query: &str, limit: i64) -> RepoResult<Vec<Skill>> {
        let pattern = like_pattern(query);
        let sql = format!(
            r"
            SELECT {SKILL_COLUMNS}
            FROM skills
            WHERE name ILIKE $1 OR description ILIKE $1
            ORDER BY name
            LIMIT $2
            ",
        );
        let rows = sqlx::query_as::<_, SkillModel>(&sql)
            .bind(&pattern)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    #[instrument(skip(self))]
    async fn search_advice(&self, query: &str, limit: i64) -> RepoResult<Vec<CareerAdvice>> {
        let pattern = like_pattern(query);
        let sql = format!(
            r"
            SELECT {ADVICE_COLUMNS}
            FROM career_advice
            WHERE status = 'published'
              AND (title ILIKE $1 OR industry ILIKE $1 OR career_stage ILIKE $1)
            ORDER BY created_at DESC
            LIMIT $2
            ",
        );
        let rows = sqlx::query_as::<_, CareerAdviceModel>(&sql)
            .bind(&pattern)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(CareerAdvice::try_from).collect()
    }
}

/// Escape LIKE metacharacters so user queries match literally
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCatalogRepository>();
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("rust"), "%rust%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("snake_case"), "%snake\\_case%");
    }
}
