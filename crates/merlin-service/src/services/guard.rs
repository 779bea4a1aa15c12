//! Guard service
//!
//! Per-server anti-abuse configuration.

use tracing::{info, instrument};

use crate::dto::{CreateGuardSettingsRequest, GuardSettingsResponse, UpdateGuardSettingsRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Guard settings service
pub struct GuardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuardService<'a> {
    /// Create a new GuardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the guard settings of a server
    #[instrument(skip(self))]
    pub async fn get_settings(&self, server_id: &str) -> ServiceResult<GuardSettingsResponse> {
        let settings = self
            .ctx
            .guard_setting_repo()
            .find_by_server(server_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Guard settings", server_id))?;

        Ok(GuardSettingsResponse::from(&settings))
    }

    /// Create guard settings for a server that has none yet
    #[instrument(skip(self, request))]
    pub async fn create_settings(
        &self,
        server_id: &str,
        request: CreateGuardSettingsRequest,
    ) -> ServiceResult<GuardSettingsResponse> {
        let settings = self
            .ctx
            .guard_setting_repo()
            .create(request.into_new(server_id))
            .await?;

        info!(server_id, active = settings.any_enabled(), "Guard settings created");

        Ok(GuardSettingsResponse::from(&settings))
    }

    /// Merge a partial update into a server's guard settings
    #[instrument(skip(self, request))]
    pub async fn update_settings(
        &self,
        server_id: &str,
        request: UpdateGuardSettingsRequest,
    ) -> ServiceResult<GuardSettingsResponse> {
        let settings = self
            .ctx
            .guard_setting_repo()
            .update(server_id, request.into())
            .await?
            .ok_or_else(|| ServiceError::not_found("Guard settings", server_id))?;

        info!(server_id, active = settings.any_enabled(), "Guard settings updated");

        Ok(GuardSettingsResponse::from(&settings))
    }
}
