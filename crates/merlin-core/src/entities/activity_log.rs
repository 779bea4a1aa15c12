//! Activity log entity - general dashboard/bot actions on a server

use chrono::{DateTime, Utc};

/// Activity log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    pub id: i32,
    pub server_id: String,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub action: String,
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Insert payload for an activity log entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewActivityLog {
    pub server_id: String,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub action: String,
    pub details: Option<String>,
}

impl NewActivityLog {
    pub fn new(server_id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            server_id: server_id.into(),
            action: action.into(),
            ..Default::default()
        }
    }

    pub fn into_activity_log(self, id: i32, timestamp: DateTime<Utc>) -> ActivityLog {
        ActivityLog {
            id,
            server_id: self.server_id,
            user_id: self.user_id,
            username: self.username,
            action: self.action,
            details: self.details,
            timestamp,
        }
    }
}
