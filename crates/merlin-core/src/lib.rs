//! # merlin-core
//!
//! Domain layer containing entities, patches, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (storage, web framework, etc.).

pub mod entities;
pub mod error;
pub mod patch;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ActivityLog, Command, GuardEvent, GuardSetting, NewActivityLog, NewCommand, NewGuardEvent,
    NewGuardSetting, NewServer, NewUser, Server, User, DEFAULT_MAX_WARNINGS, DEFAULT_MUTE_TIME,
    DEFAULT_PREFIX,
};
pub use error::DomainError;
pub use patch::{CommandPatch, GuardSettingPatch, ServerPatch};
pub use traits::{
    ActivityLogRepository, CommandRepository, GuardEventRepository, GuardSettingRepository,
    RepoResult, ServerRepository, UserRepository, DEFAULT_LOG_LIMIT,
};
pub use value_objects::{IdSequence, MonotonicClock};
