//! Public bot metadata

use axum::{extract::State, Json};
use merlin_service::{MetaService, PublicConfigResponse};

use crate::state::AppState;

/// GET /api/config
pub async fn public_config(State(state): State<AppState>) -> Json<PublicConfigResponse> {
    Json(MetaService::new(state.service_context()).public_config())
}
