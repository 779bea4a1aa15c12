//! Server service
//!
//! Handles server (guild) registration, settings updates, and queries.

use tracing::{info, instrument};

use crate::dto::{CreateServerRequest, ServerResponse, UpdateServerRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Server service
pub struct ServerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ServerService<'a> {
    /// Create a new ServerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every server the bot manages
    #[instrument(skip(self))]
    pub async fn list_servers(&self) -> ServiceResult<Vec<ServerResponse>> {
        let servers = self.ctx.server_repo().find_all().await?;
        Ok(servers.iter().map(ServerResponse::from).collect())
    }

    /// Get server by ID
    #[instrument(skip(self))]
    pub async fn get_server(&self, server_id: &str) -> ServiceResult<ServerResponse> {
        let server = self
            .ctx
            .server_repo()
            .find_by_id(server_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Server", server_id))?;

        Ok(ServerResponse::from(&server))
    }

    /// Register a new server
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_server(&self, request: CreateServerRequest) -> ServiceResult<ServerResponse> {
        let server = self.ctx.server_repo().create(request.into()).await?;

        info!(server_id = %server.id, welcome = server.has_welcome(), "Server created successfully");

        Ok(ServerResponse::from(&server))
    }

    /// Merge a partial update into a server
    #[instrument(skip(self, request))]
    pub async fn update_server(
        &self,
        server_id: &str,
        request: UpdateServerRequest,
    ) -> ServiceResult<ServerResponse> {
        let server = self
            .ctx
            .server_repo()
            .update(server_id, request.into())
            .await?
            .ok_or_else(|| ServiceError::not_found("Server", server_id))?;

        info!(server_id = %server.id, welcome = server.has_welcome(), "Server updated");

        Ok(ServerResponse::from(&server))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{context, context_with_server};

    #[tokio::test]
    async fn test_get_unknown_server_is_not_found() {
        let ctx = context().await;
        let err = ServerService::new(&ctx).get_server("404").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let ctx = context().await;
        let service = ServerService::new(&ctx);

        let created = service
            .create_server(CreateServerRequest {
                id: Some("42".to_string()),
                name: "Guild".to_string(),
                prefix: None,
                log_channel_id: None,
                welcome_channel_id: None,
                welcome_message: None,
            })
            .await
            .unwrap();
        assert_eq!(created.prefix, "!");

        let servers = service.list_servers().await.unwrap();
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].id, "42");
    }

    #[tokio::test]
    async fn test_duplicate_server_is_conflict() {
        let ctx = context_with_server("1").await;
        let err = ServerService::new(&ctx)
            .create_server(CreateServerRequest {
                id: Some("1".to_string()),
                name: "Again".to_string(),
                prefix: None,
                log_channel_id: None,
                welcome_channel_id: None,
                welcome_message: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_update_keeps_omitted_fields() {
        let ctx = context_with_server("1").await;
        let service = ServerService::new(&ctx);

        service
            .update_server(
                "1",
                UpdateServerRequest {
                    log_channel_id: Some(Some("100".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let updated = service
            .update_server(
                "1",
                UpdateServerRequest {
                    name: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.log_channel_id.as_deref(), Some("100"));
        assert_eq!(updated.prefix, "!");
    }

    #[tokio::test]
    async fn test_update_unknown_server_is_not_found() {
        let ctx = context().await;
        let err = ServerService::new(&ctx)
            .update_server("missing", UpdateServerRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
