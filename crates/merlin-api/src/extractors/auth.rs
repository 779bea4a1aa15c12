//! Authentication extractors
//!
//! Resolve the session cookie to a live user account. `AuthUser` gates the
//! "authenticated" route class and `AdminUser` the "admin" one.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use merlin_core::entities::User;
use merlin_service::{AuthService, Authenticator};
use tower_sessions::Session;

use super::session::AuthSession;
use crate::response::ApiError;
use crate::state::AppState;

/// User bound to the current session
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    pub fn id(&self) -> i32 {
        self.user.id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| ApiError::internal(anyhow::anyhow!(msg)))?;

        let Some(user_id) = AuthSession::new(&session).user_id().await? else {
            return Err(ApiError::missing_auth());
        };

        let app_state = AppState::from_ref(state);
        let user = AuthService::new(app_state.service_context())
            .load_session_user(user_id)
            .await?;

        match user {
            Some(user) => Ok(AuthUser { user }),
            None => {
                tracing::warn!(user_id, "Session refers to a user that no longer exists");
                Err(ApiError::missing_auth())
            }
        }
    }
}

/// Session user holding the admin flag
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user: User,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser { user } = AuthUser::from_request_parts(parts, state).await?;

        if !user.is_admin {
            tracing::warn!(user_id = user.id, "Admin route denied");
            return Err(ApiError::forbidden());
        }

        Ok(AdminUser { user })
    }
}
