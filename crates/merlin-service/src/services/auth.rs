//! Authentication service
//!
//! Handles registration, credential checks and session user lookup. Session
//! storage itself belongs to the HTTP layer; this service only answers
//! "who is this" questions.

use async_trait::async_trait;
use merlin_common::AppError;
use merlin_core::entities::{NewUser, User};
use merlin_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, RegisterRequest, SessionResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Credential and session checks used by the HTTP guards
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolve a username/password pair to a user
    ///
    /// Unknown usernames and wrong passwords fail with the same error.
    async fn verify_credentials(&self, username: &str, password: &str) -> ServiceResult<User>;

    /// Load the user a session points at; `None` if the account is gone
    async fn load_session_user(&self, user_id: i32) -> ServiceResult<Option<User>>;
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new (non-admin) user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let user = self
            .ctx
            .user_repo()
            .create(NewUser::new(request.username, password_hash))
            .await
            .map_err(|e| match e {
                DomainError::UsernameTaken(_) => ServiceError::validation("Username already exists"),
                other => ServiceError::Domain(other),
            })?;

        info!(user_id = user.id, "User registered successfully");

        Ok(UserResponse::from(&user))
    }

    /// Check credentials for a login attempt
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<UserResponse> {
        let user = self
            .verify_credentials(&request.username, &request.password)
            .await?;

        info!(user_id = user.id, "User logged in successfully");

        Ok(UserResponse::from(&user))
    }

    /// Describe the session for a (possibly absent) session user id
    #[instrument(skip(self))]
    pub async fn session(&self, user_id: Option<i32>) -> ServiceResult<SessionResponse> {
        let Some(user_id) = user_id else {
            return Ok(SessionResponse::anonymous());
        };

        Ok(match self.load_session_user(user_id).await? {
            Some(user) => SessionResponse::logged_in(UserResponse::from(&user)),
            None => SessionResponse::anonymous(),
        })
    }
}

#[async_trait]
impl Authenticator for AuthService<'_> {
    #[instrument(skip(self, password))]
    async fn verify_credentials(&self, username: &str, password: &str) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        self.ctx
            .password_service()
            .verify_or_error(password, &user.password_hash)
            .inspect_err(|_| warn!(user_id = user.id, "Login failed: invalid password"))?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn load_session_user(&self, user_id: i32) -> ServiceResult<Option<User>> {
        Ok(self.ctx.user_repo().find_by_id(user_id).await?)
    }
}
