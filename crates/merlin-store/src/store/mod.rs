//! Shared in-memory tables
//!
//! Every table, id sequence and clock lives behind one `RwLock`, so an id
//! assignment and the uniqueness check that precedes it happen atomically.
//! Guards are never held across an `.await`.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use merlin_core::entities::{ActivityLog, Command, GuardEvent, GuardSetting, Server, User};
use merlin_core::value_objects::{IdSequence, MonotonicClock};

use crate::repositories::{
    MemActivityLogRepository, MemCommandRepository, MemGuardEventRepository,
    MemGuardSettingRepository, MemServerRepository, MemUserRepository,
};

/// Backing tables
///
/// Logs and events are append-only vectors; because their clocks strictly
/// increase, insertion order is timestamp order.
#[derive(Debug, Default)]
pub struct Tables {
    pub users: BTreeMap<i32, User>,
    pub user_ids: IdSequence,

    pub servers: BTreeMap<String, Server>,
    pub server_clock: MonotonicClock,

    /// Keyed by server id
    pub guard_settings: BTreeMap<String, GuardSetting>,
    pub guard_setting_ids: IdSequence,

    pub commands: BTreeMap<i32, Command>,
    pub command_ids: IdSequence,

    pub activity_logs: Vec<ActivityLog>,
    pub activity_log_ids: IdSequence,
    pub activity_clock: MonotonicClock,

    pub guard_events: Vec<GuardEvent>,
    pub guard_event_ids: IdSequence,
    pub guard_event_clock: MonotonicClock,
}

impl Tables {
    pub fn server_exists(&self, id: &str) -> bool {
        self.servers.contains_key(id)
    }
}

/// Handle to the process-wide store; clones share the same tables
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write()
    }

    pub fn users(&self) -> MemUserRepository {
        MemUserRepository::new(self.clone())
    }

    pub fn servers(&self) -> MemServerRepository {
        MemServerRepository::new(self.clone())
    }

    pub fn guard_settings(&self) -> MemGuardSettingRepository {
        MemGuardSettingRepository::new(self.clone())
    }

    pub fn commands(&self) -> MemCommandRepository {
        MemCommandRepository::new(self.clone())
    }

    pub fn activity_logs(&self) -> MemActivityLogRepository {
        MemActivityLogRepository::new(self.clone())
    }

    pub fn guard_events(&self) -> MemGuardEventRepository {
        MemGuardEventRepository::new(self.clone())
    }
}
