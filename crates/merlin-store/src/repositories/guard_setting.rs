//! In-memory implementation of GuardSettingRepository

use async_trait::async_trait;
use tracing::instrument;

use merlin_core::entities::{GuardSetting, NewGuardSetting};
use merlin_core::error::DomainError;
use merlin_core::patch::GuardSettingPatch;
use merlin_core::traits::{GuardSettingRepository, RepoResult};

use crate::store::MemoryStore;

use super::error::ensure_server;

/// In-memory implementation of GuardSettingRepository
#[derive(Clone)]
pub struct MemGuardSettingRepository {
    store: MemoryStore,
}

impl MemGuardSettingRepository {
    /// Create a new MemGuardSettingRepository
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GuardSettingRepository for MemGuardSettingRepository {
    #[instrument(skip(self))]
    async fn find_by_server(&self, server_id: &str) -> RepoResult<Option<GuardSetting>> {
        Ok(self.store.read().guard_settings.get(server_id).cloned())
    }

    #[instrument(skip(self, settings), fields(server_id = %settings.server_id))]
    async fn create(&self, settings: NewGuardSetting) -> RepoResult<GuardSetting> {
        let mut tables = self.store.write();

        ensure_server(&tables, &settings.server_id)?;
        if tables.guard_settings.contains_key(&settings.server_id) {
            return Err(DomainError::GuardSettingsAlreadyExist(settings.server_id));
        }

        let id = tables.guard_setting_ids.next_id();
        let settings = settings.into_guard_setting(id);
        tables
            .guard_settings
            .insert(settings.server_id.clone(), settings.clone());

        Ok(settings)
    }

    #[instrument(skip(self, patch))]
    async fn update(
        &self,
        server_id: &str,
        patch: GuardSettingPatch,
    ) -> RepoResult<Option<GuardSetting>> {
        let mut tables = self.store.write();

        Ok(tables.guard_settings.get_mut(server_id).map(|settings| {
            patch.apply(settings);
            settings.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use merlin_core::entities::NewServer;
    use merlin_core::traits::ServerRepository;
    use serde_json::json;

    async fn store_with_server(id: &str) -> MemoryStore {
        let store = MemoryStore::new();
        store.servers().create(NewServer::new(id, "Guild")).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_create_with_defaults() {
        let store = store_with_server("1").await;
        let repo = store.guard_settings();

        let settings = repo.create(NewGuardSetting::for_server("1")).await.unwrap();
        assert_eq!(settings.id, 1);
        assert_eq!(settings.max_warnings, 3);
        assert_eq!(settings.mute_time, 300);
        assert!(!settings.anti_spam);

        assert_eq!(repo.find_by_server("1").await.unwrap(), Some(settings));
    }

    #[tokio::test]
    async fn test_one_record_per_server() {
        let store = store_with_server("1").await;
        let repo = store.guard_settings();
        repo.create(NewGuardSetting::for_server("1")).await.unwrap();

        let err = repo.create(NewGuardSetting::for_server("1")).await.unwrap_err();
        assert!(matches!(err, DomainError::GuardSettingsAlreadyExist(_)));
    }

    #[tokio::test]
    async fn test_create_for_unknown_server_rejected() {
        let repo = MemoryStore::new().guard_settings();
        let err = repo.create(NewGuardSetting::for_server("ghost")).await.unwrap_err();
        assert!(matches!(err, DomainError::ServerNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_missing_server_is_not_a_fault() {
        let repo = MemoryStore::new().guard_settings();
        let result = repo
            .update(
                "ghost",
                GuardSettingPatch {
                    anti_spam: Some(true),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_update_merges() {
        let store = store_with_server("1").await;
        let repo = store.guard_settings();
        repo.create(NewGuardSetting::for_server("1")).await.unwrap();

        let updated = repo
            .update(
                "1",
                GuardSettingPatch {
                    anti_raid: Some(true),
                    mute_time: Some(600),
                    settings: json!({ "raidThreshold": 10 }).as_object().cloned(),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert!(updated.anti_raid);
        assert!(!updated.anti_spam);
        assert_eq!(updated.mute_time, 600);
        assert_eq!(updated.max_warnings, 3);
        assert_eq!(updated.settings["raidThreshold"], json!(10));
    }
}
