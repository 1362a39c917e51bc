//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{catalog, health, moderation, proposals};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(proposal_routes())
        .merge(moderation_routes())
        .merge(catalog_routes())
}

/// Proposal routes
fn proposal_routes() -> Router<AppState> {
    Router::new()
        .route("/proposals/edits", post(proposals::submit_edit))
        .route("/proposals/entities", post(proposals::submit_new_entity))
}

/// Moderation routes
fn moderation_routes() -> Router<AppState> {
    Router::new()
        .route("/moderation/changes", get(moderation::list_pending))
        .route(
            "/moderation/changes/:change_id/approve",
            post(moderation::approve_change),
        )
        .route(
            "/moderation/changes/:change_id/reject",
            post(moderation::reject_change),
        )
}

/// Catalog routes
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/skills", get(catalog::list_skills))
        .route("/skills/search", get(catalog::search_skills))
        .route("/skills/:skill_id/resources", get(catalog::list_skill_resources))
        .route("/career-advice", get(catalog::list_career_advice))
        .route("/career-advice/search", get(catalog::search_career_advice))
}
