//! Guard settings entity - per-server anti-abuse configuration

use serde_json::{Map, Value};

/// Warnings before the bot escalates
pub const DEFAULT_MAX_WARNINGS: i32 = 3;

/// Mute duration in seconds
pub const DEFAULT_MUTE_TIME: i32 = 300;

/// Guard settings for a single server
#[derive(Debug, Clone, PartialEq)]
pub struct GuardSetting {
    pub id: i32,
    pub server_id: String,
    pub anti_spam: bool,
    pub anti_raid: bool,
    pub anti_link: bool,
    pub captcha: bool,
    pub max_warnings: i32,
    pub mute_time: i32,
    /// Free-form module settings
    pub settings: Map<String, Value>,
}

impl GuardSetting {
    /// Check if any protection module is switched on
    pub fn any_enabled(&self) -> bool {
        self.anti_spam || self.anti_raid || self.anti_link || self.captcha
    }
}

/// Insert payload for guard settings; unset fields take the defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewGuardSetting {
    pub server_id: String,
    pub anti_spam: Option<bool>,
    pub anti_raid: Option<bool>,
    pub anti_link: Option<bool>,
    pub captcha: Option<bool>,
    pub max_warnings: Option<i32>,
    pub mute_time: Option<i32>,
    pub settings: Option<Map<String, Value>>,
}

impl NewGuardSetting {
    /// Defaults for a server
    pub fn for_server(server_id: impl Into<String>) -> Self {
        Self {
            server_id: server_id.into(),
            ..Default::default()
        }
    }

    pub fn into_guard_setting(self, id: i32) -> GuardSetting {
        GuardSetting {
            id,
            server_id: self.server_id,
            anti_spam: self.anti_spam.unwrap_or(false),
            anti_raid: self.anti_raid.unwrap_or(false),
            anti_link: self.anti_link.unwrap_or(false),
            captcha: self.captcha.unwrap_or(false),
            max_warnings: self.max_warnings.unwrap_or(DEFAULT_MAX_WARNINGS),
            mute_time: self.mute_time.unwrap_or(DEFAULT_MUTE_TIME),
            settings: self.settings.unwrap_or_default(),
        }
    }
}
