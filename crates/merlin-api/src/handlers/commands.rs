//! Command catalog handlers
//!
//! Reads are public so the marketing site can render the command list;
//! edits need an admin session.

use axum::{extract::State, Json};
use merlin_service::{CommandResponse, CommandService, CreateCommandRequest, UpdateCommandRequest};

use crate::extractors::{AdminUser, ValidPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/commands
pub async fn list_commands(State(state): State<AppState>) -> ApiResult<Json<Vec<CommandResponse>>> {
    let commands = CommandService::new(state.service_context()).list_commands().await?;
    Ok(Json(commands))
}

/// GET /api/commands/category/{category}
pub async fn list_commands_by_category(
    State(state): State<AppState>,
    ValidPath(category): ValidPath<String>,
) -> ApiResult<Json<Vec<CommandResponse>>> {
    let commands = CommandService::new(state.service_context())
        .list_by_category(&category)
        .await?;
    Ok(Json(commands))
}

/// GET /api/commands/{id}
pub async fn get_command(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> ApiResult<Json<CommandResponse>> {
    let command = CommandService::new(state.service_context()).get_command(id).await?;
    Ok(Json(command))
}

/// GET /api/commands/name/{name}
pub async fn get_command_by_name(
    State(state): State<AppState>,
    ValidPath(name): ValidPath<String>,
) -> ApiResult<Json<CommandResponse>> {
    let command = CommandService::new(state.service_context())
        .get_command_by_name(&name)
        .await?;
    Ok(Json(command))
}

/// POST /api/commands
pub async fn create_command(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateCommandRequest>,
) -> ApiResult<Created<Json<CommandResponse>>> {
    let command = CommandService::new(state.service_context())
        .create_command(request)
        .await?;
    Ok(Created(Json(command)))
}

/// PATCH /api/commands/{id}
pub async fn update_command(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidPath(id): ValidPath<i32>,
    ValidatedJson(request): ValidatedJson<UpdateCommandRequest>,
) -> ApiResult<Json<CommandResponse>> {
    let command = CommandService::new(state.service_context())
        .update_command(id, request)
        .await?;
    Ok(Json(command))
}
