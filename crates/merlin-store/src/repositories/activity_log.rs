//! In-memory implementation of ActivityLogRepository

use async_trait::async_trait;
use tracing::instrument;

use merlin_core::entities::{ActivityLog, NewActivityLog};
use merlin_core::traits::{ActivityLogRepository, RepoResult};

use crate::store::MemoryStore;

use super::error::ensure_server;

/// In-memory implementation of ActivityLogRepository
#[derive(Clone)]
pub struct MemActivityLogRepository {
    store: MemoryStore,
}

impl MemActivityLogRepository {
    /// Create a new MemActivityLogRepository
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ActivityLogRepository for MemActivityLogRepository {
    #[instrument(skip(self, log), fields(server_id = %log.server_id, action = %log.action))]
    async fn create(&self, log: NewActivityLog) -> RepoResult<ActivityLog> {
        let mut tables = self.store.write();

        ensure_server(&tables, &log.server_id)?;

        let id = tables.activity_log_ids.next_id();
        let timestamp = tables.activity_clock.now();
        let log = log.into_activity_log(id, timestamp);
        tables.activity_logs.push(log.clone());

        Ok(log)
    }

    #[instrument(skip(self))]
    async fn find_by_server(&self, server_id: &str, limit: usize) -> RepoResult<Vec<ActivityLog>> {
        Ok(self
            .store
            .read()
            .activity_logs
            .iter()
            .rev()
            .filter(|log| log.server_id == server_id)
            .take(limit)
            .cloned()
            .collect())
    }
}
