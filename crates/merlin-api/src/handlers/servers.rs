//! Server handlers
//!
//! Endpoints for the Discord servers the bot is installed in.

use axum::{extract::State, Json};
use merlin_service::{CreateServerRequest, ServerResponse, ServerService, UpdateServerRequest};

use crate::extractors::{AdminUser, AuthUser, ValidPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List all servers in creation order
///
/// GET /api/servers
pub async fn list_servers(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<ServerResponse>>> {
    let servers = ServerService::new(state.service_context()).list_servers().await?;
    Ok(Json(servers))
}

/// Get a server by id
///
/// GET /api/servers/{server_id}
pub async fn get_server(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidPath(server_id): ValidPath<String>,
) -> ApiResult<Json<ServerResponse>> {
    let server = ServerService::new(state.service_context())
        .get_server(&server_id)
        .await?;
    Ok(Json(server))
}

/// Register a server
///
/// POST /api/servers
pub async fn create_server(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateServerRequest>,
) -> ApiResult<Created<Json<ServerResponse>>> {
    let server = ServerService::new(state.service_context())
        .create_server(request)
        .await?;
    Ok(Created(Json(server)))
}

/// Partially update a server
///
/// PATCH /api/servers/{server_id}
pub async fn update_server(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidPath(server_id): ValidPath<String>,
    ValidatedJson(request): ValidatedJson<UpdateServerRequest>,
) -> ApiResult<Json<ServerResponse>> {
    tracing::debug!(user_id = auth.id(), %server_id, "Server update requested");
    let server = ServerService::new(state.service_context())
        .update_server(&server_id, request)
        .await?;
    Ok(Json(server))
}
