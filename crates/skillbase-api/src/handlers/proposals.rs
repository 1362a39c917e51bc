//! Proposal handlers
//!
//! Endpoints for submitting field edits and new-entity bundles to the
//! staging queue.

use axum::{extract::State, Json};
use skillbase_service::dto::{ProposalAcceptedResponse, SubmitEditRequest, SubmitEntityRequest};
use skillbase_service::ProposalService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit a single-field edit proposal
///
/// POST /proposals/edits
pub async fn submit_edit(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitEditRequest>,
) -> ApiResult<Created<Json<ProposalAcceptedResponse>>> {
    let service = ProposalService::new(state.service_context());
    let response = service.submit_edit(request).await?;
    Ok(Created(Json(response)))
}

/// Submit a new-entity bundle proposal
///
/// POST /proposals/entities
pub async fn submit_new_entity(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitEntityRequest>,
) -> ApiResult<Created<Json<ProposalAcceptedResponse>>> {
    let service = ProposalService::new(state.service_context());
    let response = service.submit_new_entity(request).await?;
    Ok(Created(Json(response)))
}
