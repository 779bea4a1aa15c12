//! Domain entities - core business objects

mod activity_log;
mod command;
mod guard_event;
mod guard_setting;
mod server;
mod user;

pub use activity_log::{ActivityLog, NewActivityLog};
pub use command::{Command, NewCommand};
pub use guard_event::{GuardEvent, NewGuardEvent};
pub use guard_setting::{GuardSetting, NewGuardSetting, DEFAULT_MAX_WARNINGS, DEFAULT_MUTE_TIME};
pub use server::{NewServer, Server, DEFAULT_PREFIX};
pub use user::{NewUser, User};
