//! In-memory implementation of GuardEventRepository

use async_trait::async_trait;
use tracing::instrument;

use merlin_core::entities::{GuardEvent, NewGuardEvent};
use merlin_core::traits::{GuardEventRepository, RepoResult};

use crate::store::MemoryStore;

use super::error::ensure_server;

/// In-memory implementation of GuardEventRepository
#[derive(Clone)]
pub struct MemGuardEventRepository {
    store: MemoryStore,
}

impl MemGuardEventRepository {
    /// Create a new MemGuardEventRepository
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GuardEventRepository for MemGuardEventRepository {
    #[instrument(skip(self, event), fields(server_id = %event.server_id, event_type = %event.event_type))]
    async fn create(&self, event: NewGuardEvent) -> RepoResult<GuardEvent> {
        let mut tables = self.store.write();

        ensure_server(&tables, &event.server_id)?;

        let id = tables.guard_event_ids.next_id();
        let timestamp = tables.guard_event_clock.now();
        let event = event.into_guard_event(id, timestamp);
        tables.guard_events.push(event.clone());

        Ok(event)
    }

    #[instrument(skip(self))]
    async fn find_by_server(&self, server_id: &str, limit: usize) -> RepoResult<Vec<GuardEvent>> {
        Ok(self
            .store
            .read()
            .guard_events
            .iter()
            .rev()
            .filter(|event| event.server_id == server_id)
            .take(limit)
            .cloned()
            .collect())
    }
}
