//! Guard settings handlers

use axum::{extract::State, Json};
use merlin_service::{
    CreateGuardSettingsRequest, GuardService, GuardSettingsResponse, UpdateGuardSettingsRequest,
};

use crate::extractors::{AdminUser, AuthUser, ValidPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/servers/{server_id}/guard
pub async fn get_guard_settings(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidPath(server_id): ValidPath<String>,
) -> ApiResult<Json<GuardSettingsResponse>> {
    let settings = GuardService::new(state.service_context())
        .get_settings(&server_id)
        .await?;
    Ok(Json(settings))
}

/// POST /api/servers/{server_id}/guard
pub async fn create_guard_settings(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidPath(server_id): ValidPath<String>,
    ValidatedJson(request): ValidatedJson<CreateGuardSettingsRequest>,
) -> ApiResult<Created<Json<GuardSettingsResponse>>> {
    let settings = GuardService::new(state.service_context())
        .create_settings(&server_id, request)
        .await?;
    Ok(Created(Json(settings)))
}

/// PATCH /api/servers/{server_id}/guard
pub async fn update_guard_settings(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidPath(server_id): ValidPath<String>,
    ValidatedJson(request): ValidatedJson<UpdateGuardSettingsRequest>,
) -> ApiResult<Json<GuardSettingsResponse>> {
    let settings = GuardService::new(state.service_context())
        .update_settings(&server_id, request)
        .await?;
    Ok(Json(settings))
}
