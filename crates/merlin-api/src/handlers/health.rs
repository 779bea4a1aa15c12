//! Health check handler
//!
//! Liveness probe; the in-memory store has no external dependency to
//! check, so there is no separate readiness probe.

use axum::{extract::State, Json};
use merlin_service::{HealthResponse, MetaService};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(MetaService::new(state.service_context()).health())
}
