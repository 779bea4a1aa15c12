//! In-memory implementation of ServerRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use merlin_core::entities::{NewServer, Server};
use merlin_core::error::DomainError;
use merlin_core::patch::ServerPatch;
use merlin_core::traits::{RepoResult, ServerRepository};

use crate::store::MemoryStore;

/// In-memory implementation of ServerRepository
#[derive(Clone)]
pub struct MemServerRepository {
    store: MemoryStore,
}

impl MemServerRepository {
    /// Create a new MemServerRepository
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ServerRepository for MemServerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Server>> {
        Ok(self.store.read().servers.get(id).cloned())
    }

    /// Servers in creation order
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Server>> {
        let mut servers: Vec<Server> = self.store.read().servers.values().cloned().collect();
        servers.sort_by_key(|s| s.created_at);
        Ok(servers)
    }

    #[instrument(skip(self, server), fields(name = %server.name))]
    async fn create(&self, server: NewServer) -> RepoResult<Server> {
        let id = server
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut tables = self.store.write();

        if tables.servers.contains_key(&id) {
            return Err(DomainError::ServerAlreadyExists(id));
        }

        let created_at = tables.server_clock.now();
        let server = server.into_server(id.clone(), created_at);
        tables.servers.insert(id, server.clone());

        Ok(server)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &str, patch: ServerPatch) -> RepoResult<Option<Server>> {
        let mut tables = self.store.write();

        Ok(tables.servers.get_mut(id).map(|server| {
            patch.apply(server);
            server.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_with_explicit_id() {
        let repo = MemoryStore::new().servers();
        let server = repo.create(NewServer::new("123", "Guild")).await.unwrap();

        assert_eq!(server.id, "123");
        assert_eq!(server.prefix, "!");
        assert_eq!(repo.find_by_id("123").await.unwrap(), Some(server));
    }

    #[tokio::test]
    async fn test_create_generates_id_when_absent() {
        let repo = MemoryStore::new().servers();
        let server = repo
            .create(NewServer {
                name: "Guild".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(Uuid::parse_str(&server.id).is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let repo = MemoryStore::new().servers();
        repo.create(NewServer::new("1", "First")).await.unwrap();

        let err = repo.create(NewServer::new("1", "Second")).await.unwrap_err();
        assert!(matches!(err, DomainError::ServerAlreadyExists(_)));
        assert_eq!(repo.find_by_id("1").await.unwrap().unwrap().name, "First");
    }

    #[tokio::test]
    async fn test_find_all_in_creation_order() {
        let repo = MemoryStore::new().servers();
        for id in ["9", "10", "1"] {
            repo.create(NewServer::new(id, format!("Guild {id}"))).await.unwrap();
        }

        let ids: Vec<String> = repo.find_all().await.unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["9", "10", "1"]);
    }

    #[tokio::test]
    async fn test_update_merges_and_keeps_omitted_fields() {
        let repo = MemoryStore::new().servers();
        let created = repo
            .create(NewServer {
                log_channel_id: Some("55".to_string()),
                ..NewServer::new("1", "Guild")
            })
            .await
            .unwrap();

        let updated = repo
            .update(
                "1",
                ServerPatch {
                    prefix: Some("?".to_string()),
                    welcome_message: Some(Some("Hoş geldin!".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.prefix, "?");
        assert_eq!(updated.name, "Guild");
        assert_eq!(updated.log_channel_id.as_deref(), Some("55"));
        assert_eq!(updated.welcome_message.as_deref(), Some("Hoş geldin!"));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_unknown_server_is_none() {
        let repo = MemoryStore::new().servers();
        let result = repo.update("missing", ServerPatch::default()).await.unwrap();
        assert!(result.is_none());
    }
}
