//! Partial updates - shallow merges over stored records
//!
//! A `None` field leaves the stored value untouched. For nullable columns the
//! inner option distinguishes "set to null" (`Some(None)`) from "absent" (`None`).

use serde_json::{Map, Value};

use crate::entities::{Command, GuardSetting, Server};

/// Partial update for a server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerPatch {
    pub name: Option<String>,
    pub prefix: Option<String>,
    pub log_channel_id: Option<Option<String>>,
    pub welcome_channel_id: Option<Option<String>>,
    pub welcome_message: Option<Option<String>>,
}

impl ServerPatch {
    /// Check if the patch carries no fields
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.prefix.is_none()
            && self.log_channel_id.is_none()
            && self.welcome_channel_id.is_none()
            && self.welcome_message.is_none()
    }

    pub fn apply(self, server: &mut Server) {
        if let Some(name) = self.name {
            server.name = name;
        }
        if let Some(prefix) = self.prefix {
            server.prefix = prefix;
        }
        if let Some(log_channel_id) = self.log_channel_id {
            server.log_channel_id = log_channel_id;
        }
        if let Some(welcome_channel_id) = self.welcome_channel_id {
            server.welcome_channel_id = welcome_channel_id;
        }
        if let Some(welcome_message) = self.welcome_message {
            server.welcome_message = welcome_message;
        }
    }
}

/// Partial update for guard settings
///
/// `settings` replaces the whole map, it is not merged key by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuardSettingPatch {
    pub anti_spam: Option<bool>,
    pub anti_raid: Option<bool>,
    pub anti_link: Option<bool>,
    pub captcha: Option<bool>,
    pub max_warnings: Option<i32>,
    pub mute_time: Option<i32>,
    pub settings: Option<Map<String, Value>>,
}

impl GuardSettingPatch {
    pub fn apply(self, guard: &mut GuardSetting) {
        if let Some(v) = self.anti_spam {
            guard.anti_spam = v;
        }
        if let Some(v) = self.anti_raid {
            guard.anti_raid = v;
        }
        if let Some(v) = self.anti_link {
            guard.anti_link = v;
        }
        if let Some(v) = self.captcha {
            guard.captcha = v;
        }
        if let Some(v) = self.max_warnings {
            guard.max_warnings = v;
        }
        if let Some(v) = self.mute_time {
            guard.mute_time = v;
        }
        if let Some(settings) = self.settings {
            guard.settings = settings;
        }
    }
}

/// Partial update for a catalog command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub usage: Option<String>,
    pub enabled: Option<bool>,
}

impl CommandPatch {
    pub fn apply(self, command: &mut Command) {
        if let Some(name) = self.name {
            command.name = name;
        }
        if let Some(category) = self.category {
            command.category = category;
        }
        if let Some(description) = self.description {
            command.description = description;
        }
        if let Some(usage) = self.usage {
            command.usage = usage;
        }
        if let Some(enabled) = self.enabled {
            command.enabled = enabled;
        }
    }
}
