//! Catalog service
//!
//! Read-only listing and search over the live domain tables. Nothing here
//! mutates anything; the staging queue is invisible to these queries.

use std::collections::HashMap;

use tracing::instrument;

use skillbase_core::value_objects::Id;

use crate::dto::{
    CareerAdviceResponse, ResourceResponse, SearchQuery, SkillResponse,
    SkillWithResourcesResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

const DEFAULT_SEARCH_LIMIT: i64 = 20;
const MAX_SEARCH_LIMIT: i64 = 50;

/// Catalog service
pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    /// Create a new CatalogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all skills
    #[instrument(skip(self))]
    pub async fn list_skills(&self) -> ServiceResult<Vec<SkillResponse>> {
        let skills = self.ctx.catalog_repo().list_skills().await?;
        Ok(skills.into_iter().map(SkillResponse::from).collect())
    }

    /// List the approved resources of one skill
    #[instrument(skip(self))]
    pub async fn list_skill_resources(&self, skill_id: Id) -> ServiceResult<Vec<ResourceResponse>> {
        let resources = self.ctx.catalog_repo().list_skill_resources(skill_id).await?;
        Ok(resources.into_iter().map(ResourceResponse::from).collect())
    }

    /// List published career-advice articles
    #[instrument(skip(self))]
    pub async fn list_published_advice(&self) -> ServiceResult<Vec<CareerAdviceResponse>> {
        let advice = self.ctx.catalog_repo().list_published_advice().await?;
        Ok(advice.into_iter().map(CareerAdviceResponse::from).collect())
    }

    /// Search skills by name, description, or category, returning each hit
    /// together with its approved resources
    #[instrument(skip(self, query))]
    pub async fn search_skills(
        &self,
        query: SearchQuery,
    ) -> ServiceResult<Vec<SkillWithResourcesResponse>> {
        let limit = clamp_limit(query.limit);
        let skills = self.ctx.catalog_repo().search_skills(&query.q, limit).await?;

        let skill_ids: Vec<Id> = skills.iter().map(|s| s.id).collect();
        let resources = self
            .ctx
            .catalog_repo()
            .list_resources_for_skills(&skill_ids)
            .await?;

        let mut by_skill: HashMap<Id, Vec<ResourceResponse>> = HashMap::new();
        for resource in resources {
            by_skill
                .entry(resource.skill_id)
                .or_default()
                .push(ResourceResponse::from(resource));
        }

        Ok(skills
            .into_iter()
            .map(|skill| {
                let resources = by_skill.remove(&skill.id).unwrap_or_default();
                SkillWithResourcesResponse {
                    skill: SkillResponse::from(skill),
                    resources,
                }
            })
            .collect())
    }

    /// Search published career advice by title, industry, or career stage
    #[instrument(skip(self, query))]
    pub async fn search_advice(&self, query: SearchQuery) -> ServiceResult<Vec<CareerAdviceResponse>> {
        let limit = clamp_limit(query.limit);
        let advice = self.ctx.catalog_repo().search_advice(&query.q, limit).await?;
        Ok(advice.into_iter().map(CareerAdviceResponse::from).collect())
    }
}

fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_SEARCH_LIMIT).clamp(1, MAX_SEARCH_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_clamping() {
        assert_eq!(clamp_limit(None), DEFAULT_SEARCH_LIMIT);
        assert_eq!(clamp_limit(Some(10)), 10);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-3)), 1);
        assert_eq!(clamp_limit(Some(500)), MAX_SEARCH_LIMIT);
    }
}
