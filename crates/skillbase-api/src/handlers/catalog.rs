//! Catalog handlers
//!
//! Read-only endpoints over the live skill and career-advice tables.

use axum::{
    extract::{Path, State},
    Json,
};
use skillbase_core::Id;
use skillbase_service::dto::{
    CareerAdviceResponse, ResourceResponse, SearchQuery, SkillResponse,
    SkillWithResourcesResponse,
};
use skillbase_service::CatalogService;

use crate::extractors::ValidatedQuery;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List all skills
///
/// GET /skills
pub async fn list_skills(State(state): State<AppState>) -> ApiResult<Json<Vec<SkillResponse>>> {
    let service = CatalogService::new(state.service_context());
    let skills = service.list_skills().await?;
    Ok(Json(skills))
}

/// List the approved resources of a skill
///
/// GET /skills/{skill_id}/resources
pub async fn list_skill_resources(
    State(state): State<AppState>,
    Path(skill_id): Path<String>,
) -> ApiResult<Json<Vec<ResourceResponse>>> {
    let skill_id: i64 = skill_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid skill_id format"))?;

    let service = CatalogService::new(state.service_context());
    let resources = service.list_skill_resources(Id::new(skill_id)).await?;
    Ok(Json(resources))
}

/// Search skills, returning each hit with its approved resources
///
/// GET /skills/search
pub async fn search_skills(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> ApiResult<Json<Vec<SkillWithResourcesResponse>>> {
    let service = CatalogService::new(state.service_context());
    let hits = service.search_skills(query).await?;
    Ok(Json(hits))
}

/// List published career-advice articles
///
/// GET /career-advice
pub async fn list_career_advice(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CareerAdviceResponse>>> {
    let service = CatalogService::new(state.service_context());
    let advice = service.list_published_advice().await?;
    Ok(Json(advice))
}

/// Search published career-advice articles
///
/// GET /career-advice/search
pub async fn search_career_advice(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> ApiResult<Json<Vec<CareerAdviceResponse>>> {
    let service = CatalogService::new(state.service_context());
    let advice = service.search_advice(query).await?;
    Ok(Json(advice))
}
