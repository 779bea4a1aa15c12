//! Server entity - a Discord guild managed by the bot

use chrono::{DateTime, Utc};

/// Command prefix used when none is configured
pub const DEFAULT_PREFIX: &str = "!";

/// Server (guild) entity, keyed by the platform guild id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub prefix: String,
    pub log_channel_id: Option<String>,
    pub welcome_channel_id: Option<String>,
    pub welcome_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Server {
    /// Check if join messages are fully configured
    pub fn has_welcome(&self) -> bool {
        self.welcome_channel_id.is_some() && self.welcome_message.is_some()
    }
}

/// Insert payload for a new server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewServer {
    /// Guild id; the store generates one when absent
    pub id: Option<String>,
    pub name: String,
    pub prefix: Option<String>,
    pub log_channel_id: Option<String>,
    pub welcome_channel_id: Option<String>,
    pub welcome_message: Option<String>,
}

impl NewServer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Build the stored record with its final id and creation time
    pub fn into_server(self, id: String, created_at: DateTime<Utc>) -> Server {
        Server {
            id,
            name: self.name,
            prefix: self.prefix.unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            log_channel_id: self.log_channel_id,
            welcome_channel_id: self.welcome_channel_id,
            welcome_message: self.welcome_message,
            created_at,
        }
    }
}
