//! Guard event entity - a trigger of the anti-abuse system

use chrono::{DateTime, Utc};

/// Guard event, e.g. a spam detection that ended in a mute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardEvent {
    pub id: i32,
    pub server_id: String,
    pub user_id: Option<String>,
    pub username: Option<String>,
    /// Which guard fired (`spam`, `raid`, `link`, ...)
    pub event_type: String,
    /// What the bot did about it (`warn`, `mute`, `kick`, ...)
    pub action: String,
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Insert payload for a guard event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGuardEvent {
    pub server_id: String,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub event_type: String,
    pub action: String,
    pub details: Option<String>,
}

impl NewGuardEvent {
    pub fn new(
        server_id: impl Into<String>,
        event_type: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            server_id: server_id.into(),
            event_type: event_type.into(),
            action: action.into(),
            ..Default::default()
        }
    }

    pub fn into_guard_event(self, id: i32, timestamp: DateTime<Utc>) -> GuardEvent {
        GuardEvent {
            id,
            server_id: self.server_id,
            user_id: self.user_id,
            username: self.username,
            event_type: self.event_type,
            action: self.action,
            details: self.details,
            timestamp,
        }
    }
}
