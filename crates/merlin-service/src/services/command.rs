//! Command service
//!
//! Read access to the bot's command catalog, plus admin edits.

use tracing::{info, instrument};

use crate::dto::{CommandResponse, CreateCommandRequest, UpdateCommandRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Command catalog service
pub struct CommandService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommandService<'a> {
    /// Create a new CommandService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list_commands(&self) -> ServiceResult<Vec<CommandResponse>> {
        let commands = self.ctx.command_repo().find_all().await?;
        Ok(commands.iter().map(CommandResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn list_by_category(&self, category: &str) -> ServiceResult<Vec<CommandResponse>> {
        let commands = self.ctx.command_repo().find_by_category(category).await?;
        Ok(commands.iter().map(CommandResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_command(&self, id: i32) -> ServiceResult<CommandResponse> {
        let command = self
            .ctx
            .command_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Command", id.to_string()))?;

        Ok(CommandResponse::from(&command))
    }

    #[instrument(skip(self))]
    pub async fn get_command_by_name(&self, name: &str) -> ServiceResult<CommandResponse> {
        let command = self
            .ctx
            .command_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::not_found("Command", name))?;

        Ok(CommandResponse::from(&command))
    }

    /// Add a command to the catalog
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_command(&self, request: CreateCommandRequest) -> ServiceResult<CommandResponse> {
        let command = self.ctx.command_repo().create(request.into()).await?;

        info!(command_id = command.id, "Command created");

        Ok(CommandResponse::from(&command))
    }

    #[instrument(skip(self, request))]
    pub async fn update_command(
        &self,
        id: i32,
        request: UpdateCommandRequest,
    ) -> ServiceResult<CommandResponse> {
        let command = self
            .ctx
            .command_repo()
            .update(id, request.into())
            .await?
            .ok_or_else(|| ServiceError::not_found("Command", id.to_string()))?;

        info!(command_id = command.id, "Command updated");

        Ok(CommandResponse::from(&command))
    }
}
