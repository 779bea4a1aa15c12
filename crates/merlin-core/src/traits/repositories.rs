//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the storage layer
//! provides the implementation.
//!
//! Updates return `Ok(None)` when the target record does not exist; that is
//! a normal outcome, not an error.

use async_trait::async_trait;

use crate::entities::{
    ActivityLog, Command, GuardEvent, GuardSetting, NewActivityLog, NewCommand, NewGuardEvent,
    NewGuardSetting, NewServer, NewUser, Server, User,
};
use crate::error::DomainError;
use crate::patch::{CommandPatch, GuardSettingPatch, ServerPatch};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Number of log entries returned when the caller gives no limit
pub const DEFAULT_LOG_LIMIT: usize = 100;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>>;

    /// Find user by username (exact match)
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Create a new user, rejecting a username already in use
    async fn create(&self, user: NewUser) -> RepoResult<User>;

    /// Grant or revoke dashboard admin rights
    async fn set_admin(&self, id: i32, is_admin: bool) -> RepoResult<Option<User>>;
}

// ============================================================================
// Server Repository
// ============================================================================

#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// Find server by guild ID
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Server>>;

    /// List all servers
    async fn find_all(&self) -> RepoResult<Vec<Server>>;

    /// Create a new server, generating an ID when none is given
    async fn create(&self, server: NewServer) -> RepoResult<Server>;

    /// Merge a partial update into an existing server
    async fn update(&self, id: &str, patch: ServerPatch) -> RepoResult<Option<Server>>;
}

// ============================================================================
// Guard Setting Repository
// ============================================================================

#[async_trait]
pub trait GuardSettingRepository: Send + Sync {
    /// Find guard settings for a server
    async fn find_by_server(&self, server_id: &str) -> RepoResult<Option<GuardSetting>>;

    /// Create guard settings; at most one record per server
    async fn create(&self, settings: NewGuardSetting) -> RepoResult<GuardSetting>;

    /// Merge a partial update into a server's guard settings
    async fn update(
        &self,
        server_id: &str,
        patch: GuardSettingPatch,
    ) -> RepoResult<Option<GuardSetting>>;
}

// ============================================================================
// Command Repository
// ============================================================================

#[async_trait]
pub trait CommandRepository: Send + Sync {
    /// Find command by ID
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Command>>;

    /// Find command by name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Command>>;

    /// List the whole catalog (ordered by ID)
    async fn find_all(&self) -> RepoResult<Vec<Command>>;

    /// List commands in a category (ordered by ID)
    async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Command>>;

    /// Add a command to the catalog
    async fn create(&self, command: NewCommand) -> RepoResult<Command>;

    /// Merge a partial update into a command
    async fn update(&self, id: i32, patch: CommandPatch) -> RepoResult<Option<Command>>;
}

// ============================================================================
// Activity Log Repository
// ============================================================================

#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    /// Append an activity log entry; the timestamp is assigned here
    async fn create(&self, log: NewActivityLog) -> RepoResult<ActivityLog>;

    /// Most recent entries for a server, newest first, at most `limit`
    async fn find_by_server(&self, server_id: &str, limit: usize) -> RepoResult<Vec<ActivityLog>>;
}

// ============================================================================
// Guard Event Repository
// ============================================================================

#[async_trait]
pub trait GuardEventRepository: Send + Sync {
    /// Append a guard event; the timestamp is assigned here
    async fn create(&self, event: NewGuardEvent) -> RepoResult<GuardEvent>;

    /// Most recent events for a server, newest first, at most `limit`
    async fn find_by_server(&self, server_id: &str, limit: usize) -> RepoResult<Vec<GuardEvent>>;
}
