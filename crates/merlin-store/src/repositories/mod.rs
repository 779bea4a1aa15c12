//! Repository implementations
//!
//! In-memory implementations of the repository traits defined in merlin-core.
//! Each repository handles operations for a specific domain entity and
//! shares the tables of one `MemoryStore`.

mod activity_log;
mod command;
mod error;
mod guard_event;
mod guard_setting;
mod server;
mod user;

pub use activity_log::MemActivityLogRepository;
pub use command::MemCommandRepository;
pub use guard_event::MemGuardEventRepository;
pub use guard_setting::MemGuardSettingRepository;
pub use server::MemServerRepository;
pub use user::MemUserRepository;
