//! Activity log and guard event handlers
//!
//! Both listings are newest first and honour `?limit=`.

use axum::{extract::State, Json};
use merlin_service::{
    ActivityLogResponse, ActivityService, CreateActivityLogRequest, CreateGuardEventRequest,
    GuardEventResponse,
};

use crate::extractors::{AdminUser, AuthUser, LimitQuery, ValidPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/servers/{server_id}/activity
pub async fn list_activity(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidPath(server_id): ValidPath<String>,
    query: LimitQuery,
) -> ApiResult<Json<Vec<ActivityLogResponse>>> {
    let logs = ActivityService::new(state.service_context())
        .list_activity(&server_id, query.limit)
        .await?;
    Ok(Json(logs))
}

/// POST /api/servers/{server_id}/activity
pub async fn record_activity(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidPath(server_id): ValidPath<String>,
    ValidatedJson(request): ValidatedJson<CreateActivityLogRequest>,
) -> ApiResult<Created<Json<ActivityLogResponse>>> {
    let log = ActivityService::new(state.service_context())
        .record_activity(&server_id, request)
        .await?;
    Ok(Created(Json(log)))
}

/// GET /api/servers/{server_id}/guard-events
pub async fn list_guard_events(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidPath(server_id): ValidPath<String>,
    query: LimitQuery,
) -> ApiResult<Json<Vec<GuardEventResponse>>> {
    let events = ActivityService::new(state.service_context())
        .list_guard_events(&server_id, query.limit)
        .await?;
    Ok(Json(events))
}

/// POST /api/servers/{server_id}/guard-events
pub async fn record_guard_event(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidPath(server_id): ValidPath<String>,
    ValidatedJson(request): ValidatedJson<CreateGuardEventRequest>,
) -> ApiResult<Created<Json<GuardEventResponse>>> {
    let event = ActivityService::new(state.service_context())
        .record_guard_event(&server_id, request)
        .await?;
    Ok(Created(Json(event)))
}
