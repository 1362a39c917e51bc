//! Moderation handlers
//!
//! Endpoints for the admin review queue: listing, approving, and rejecting
//! pending changes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use skillbase_core::Id;
use skillbase_service::dto::{
    ApprovalResponse, ChangeRecordResponse, ModerationRequest, PendingQueueQuery,
    RejectionResponse,
};
use skillbase_service::ModerationService;

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List pending changes
///
/// GET /moderation/changes
pub async fn list_pending(
    State(state): State<AppState>,
    Query(query): Query<PendingQueueQuery>,
) -> ApiResult<Json<Vec<ChangeRecordResponse>>> {
    let service = ModerationService::new(state.service_context());
    let changes = service.list_pending(query).await?;
    Ok(Json(changes))
}

/// Approve a pending change
///
/// POST /moderation/changes/{change_id}/approve
pub async fn approve_change(
    State(state): State<AppState>,
    Path(change_id): Path<String>,
    Json(request): Json<ModerationRequest>,
) -> ApiResult<Json<ApprovalResponse>> {
    let change_id: i64 = change_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid change_id format"))?;

    let service = ModerationService::new(state.service_context());
    let response = service.approve(Id::new(change_id), request).await?;
    Ok(Json(response))
}

/// Reject a pending change
///
/// POST /moderation/changes/{change_id}/reject
pub async fn reject_change(
    State(state): State<AppState>,
    Path(change_id): Path<String>,
    Json(request): Json<ModerationRequest>,
) -> ApiResult<Json<RejectionResponse>> {
    let change_id: i64 = change_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid change_id format"))?;

    let service = ModerationService::new(state.service_context());
    let response = service.reject(Id::new(change_id), request).await?;
    Ok(Json(response))
}
