//! Service context - dependency container for services
//!
//! Holds all repositories, the password service and the loaded configuration.

use std::sync::Arc;

use merlin_common::{AppConfig, PasswordService};
use merlin_core::traits::{
    ActivityLogRepository, CommandRepository, GuardEventRepository, GuardSettingRepository,
    ServerRepository, UserRepository,
};
use merlin_store::MemoryStore;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    server_repo: Arc<dyn ServerRepository>,
    guard_setting_repo: Arc<dyn GuardSettingRepository>,
    command_repo: Arc<dyn CommandRepository>,
    activity_log_repo: Arc<dyn ActivityLogRepository>,
    guard_event_repo: Arc<dyn GuardEventRepository>,

    // Services
    password_service: Arc<PasswordService>,
    config: Arc<AppConfig>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        server_repo: Arc<dyn ServerRepository>,
        guard_setting_repo: Arc<dyn GuardSettingRepository>,
        command_repo: Arc<dyn CommandRepository>,
        activity_log_repo: Arc<dyn ActivityLogRepository>,
        guard_event_repo: Arc<dyn GuardEventRepository>,
        password_service: Arc<PasswordService>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            user_repo,
            server_repo,
            guard_setting_repo,
            command_repo,
            activity_log_repo,
            guard_event_repo,
            password_service,
            config,
        }
    }

    /// Wire every repository to one in-memory store
    pub fn in_memory(store: &MemoryStore, config: Arc<AppConfig>) -> Self {
        Self::new(
            Arc::new(store.users()),
            Arc::new(store.servers()),
            Arc::new(store.guard_settings()),
            Arc::new(store.commands()),
            Arc::new(store.activity_logs()),
            Arc::new(store.guard_events()),
            Arc::new(PasswordService::new()),
            config,
        )
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the server repository
    pub fn server_repo(&self) -> &dyn ServerRepository {
        self.server_repo.as_ref()
    }

    /// Get the guard settings repository
    pub fn guard_setting_repo(&self) -> &dyn GuardSettingRepository {
        self.guard_setting_repo.as_ref()
    }

    /// Get the command repository
    pub fn command_repo(&self) -> &dyn CommandRepository {
        self.command_repo.as_ref()
    }

    /// Get the activity log repository
    pub fn activity_log_repo(&self) -> &dyn ActivityLogRepository {
        self.activity_log_repo.as_ref()
    }

    /// Get the guard event repository
    pub fn guard_event_repo(&self) -> &dyn GuardEventRepository {
        self.guard_event_repo.as_ref()
    }

    // === Services ===

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        self.password_service.as_ref()
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &AppConfig {
        self.config.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"[...]")
            .field("app", &self.config.app.name)
            .finish()
    }
}
