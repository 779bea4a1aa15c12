//! In-memory implementation of CommandRepository

use async_trait::async_trait;
use tracing::instrument;

use merlin_core::entities::{Command, NewCommand};
use merlin_core::patch::CommandPatch;
use merlin_core::traits::{CommandRepository, RepoResult};

use crate::store::MemoryStore;

/// In-memory implementation of CommandRepository
#[derive(Clone)]
pub struct MemCommandRepository {
    store: MemoryStore,
}

impl MemCommandRepository {
    /// Create a new MemCommandRepository
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandRepository for MemCommandRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Command>> {
        Ok(self.store.read().commands.get(&id).cloned())
    }

    /// Lowest id wins when names repeat
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Command>> {
        Ok(self
            .store
            .read()
            .commands
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Command>> {
        Ok(self.store.read().commands.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Command>> {
        Ok(self
            .store
            .read()
            .commands
            .values()
            .filter(|c| c.category == category)
            .cloned()
            .collect())
    }

    #[instrument(skip(self, command), fields(name = %command.name))]
    async fn create(&self, command: NewCommand) -> RepoResult<Command> {
        let mut tables = self.store.write();

        let id = tables.command_ids.next_id();
        let command = command.into_command(id);
        tables.commands.insert(id, command.clone());

        Ok(command)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i32, patch: CommandPatch) -> RepoResult<Option<Command>> {
        let mut tables = self.store.write();

        Ok(tables.commands.get_mut(&id).map(|command| {
            patch.apply(command);
            command.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo_with_catalog() -> MemCommandRepository {
        let repo = MemoryStore::new().commands();
        repo.create(NewCommand::new("ban", "moderation", "Bans", "/ban @user"))
            .await
            .unwrap();
        repo.create(NewCommand::new("anti-spam", "guard", "Spam guard", "/anti-spam [level]"))
            .await
            .unwrap();
        repo.create(NewCommand::new("kick", "moderation", "Kicks", "/kick @user"))
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let repo = repo_with_catalog().await;
        let ids: Vec<i32> = repo.find_all().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_find_by_category() {
        let repo = repo_with_catalog().await;

        let names: Vec<String> = repo
            .find_by_category("moderation")
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["ban", "kick"]);

        assert!(repo.find_by_category("music").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let repo = repo_with_catalog().await;
        assert_eq!(repo.find_by_name("kick").await.unwrap().unwrap().id, 3);
        assert!(repo.find_by_name("mute").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_toggles_enabled() {
        let repo = repo_with_catalog().await;

        let updated = repo
            .update(
                1,
                CommandPatch {
                    enabled: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert!(!updated.enabled);
        assert_eq!(updated.usage, "/ban @user");
        assert!(repo.update(42, CommandPatch::default()).await.unwrap().is_none());
    }
}
