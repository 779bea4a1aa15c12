//! Authentication handlers
//!
//! Endpoints for login, logout, session introspection and registration.

use axum::{extract::State, Json};
use merlin_service::{
    AuthService, LoginRequest, RegisterRequest, RegisterResponse, SessionResponse, UserEnvelope,
};
use tower_sessions::Session;

use crate::extractors::{AuthSession, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Log in with username and password
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<UserEnvelope>> {
    let user = AuthService::new(state.service_context()).login(request).await?;
    AuthSession::new(&session).log_in(user.id).await?;
    Ok(Json(UserEnvelope { user }))
}

/// End the current session
///
/// POST /api/logout
pub async fn logout(session: Session) -> ApiResult<NoContent> {
    AuthSession::new(&session).log_out().await?;
    Ok(NoContent)
}

/// Report whether the caller is logged in
///
/// GET /api/session
pub async fn session(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<SessionResponse>> {
    let user_id = AuthSession::new(&session).user_id().await?;
    let response = AuthService::new(state.service_context()).session(user_id).await?;
    Ok(Json(response))
}

/// Register a new non-admin account
///
/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<RegisterResponse>>> {
    let user = AuthService::new(state.service_context()).register(request).await?;
    Ok(Created(Json(RegisterResponse::new(user))))
}
