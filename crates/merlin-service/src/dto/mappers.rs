//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs, and
//! from request DTOs to domain insert payloads and patches.

use merlin_common::AppConfig;
use merlin_core::entities::{
    ActivityLog, Command, GuardEvent, GuardSetting, NewActivityLog, NewCommand, NewGuardEvent,
    NewGuardSetting, NewServer, Server, User,
};
use merlin_core::patch::{CommandPatch, GuardSettingPatch, ServerPatch};

use super::requests::{
    CreateActivityLogRequest, CreateCommandRequest, CreateGuardEventRequest,
    CreateGuardSettingsRequest, CreateServerRequest, UpdateCommandRequest,
    UpdateGuardSettingsRequest, UpdateServerRequest,
};
use super::responses::{
    ActivityLogResponse, CommandResponse, GuardEventResponse, GuardSettingsResponse,
    PublicConfigResponse, ServerResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            is_admin: user.is_admin,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Server Mappers
// ============================================================================

impl From<&Server> for ServerResponse {
    fn from(server: &Server) -> Self {
        Self {
            id: server.id.clone(),
            name: server.name.clone(),
            prefix: server.prefix.clone(),
            log_channel_id: server.log_channel_id.clone(),
            welcome_channel_id: server.welcome_channel_id.clone(),
            welcome_message: server.welcome_message.clone(),
            created_at: server.created_at,
        }
    }
}

impl From<CreateServerRequest> for NewServer {
    fn from(request: CreateServerRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            prefix: request.prefix,
            log_channel_id: request.log_channel_id,
            welcome_channel_id: request.welcome_channel_id,
            welcome_message: request.welcome_message,
        }
    }
}

impl From<UpdateServerRequest> for ServerPatch {
    fn from(request: UpdateServerRequest) -> Self {
        Self {
            name: request.name,
            prefix: request.prefix,
            log_channel_id: request.log_channel_id,
            welcome_channel_id: request.welcome_channel_id,
            welcome_message: request.welcome_message,
        }
    }
}

// ============================================================================
// Guard Mappers
// ============================================================================

impl From<&GuardSetting> for GuardSettingsResponse {
    fn from(settings: &GuardSetting) -> Self {
        Self {
            id: settings.id,
            server_id: settings.server_id.clone(),
            anti_spam: settings.anti_spam,
            anti_raid: settings.anti_raid,
            anti_link: settings.anti_link,
            captcha: settings.captcha,
            max_warnings: settings.max_warnings,
            mute_time: settings.mute_time,
            settings: settings.settings.clone(),
        }
    }
}

impl CreateGuardSettingsRequest {
    pub fn into_new(self, server_id: &str) -> NewGuardSetting {
        NewGuardSetting {
            server_id: server_id.to_string(),
            anti_spam: self.anti_spam,
            anti_raid: self.anti_raid,
            anti_link: self.anti_link,
            captcha: self.captcha,
            max_warnings: self.max_warnings,
            mute_time: self.mute_time,
            settings: self.settings,
        }
    }
}

impl From<UpdateGuardSettingsRequest> for GuardSettingPatch {
    fn from(request: UpdateGuardSettingsRequest) -> Self {
        Self {
            anti_spam: request.anti_spam,
            anti_raid: request.anti_raid,
            anti_link: request.anti_link,
            captcha: request.captcha,
            max_warnings: request.max_warnings,
            mute_time: request.mute_time,
            settings: request.settings,
        }
    }
}

// ============================================================================
// Log Mappers
// ============================================================================

impl From<&ActivityLog> for ActivityLogResponse {
    fn from(log: &ActivityLog) -> Self {
        Self {
            id: log.id,
            server_id: log.server_id.clone(),
            user_id: log.user_id.clone(),
            username: log.username.clone(),
            action: log.action.clone(),
            details: log.details.clone(),
            timestamp: log.timestamp,
        }
    }
}

impl CreateActivityLogRequest {
    pub fn into_new(self, server_id: &str) -> NewActivityLog {
        NewActivityLog {
            server_id: server_id.to_string(),
            user_id: self.user_id,
            username: self.username,
            action: self.action,
            details: self.details,
        }
    }
}

impl From<&GuardEvent> for GuardEventResponse {
    fn from(event: &GuardEvent) -> Self {
        Self {
            id: event.id,
            server_id: event.server_id.clone(),
            user_id: event.user_id.clone(),
            username: event.username.clone(),
            event_type: event.event_type.clone(),
            action: event.action.clone(),
            details: event.details.clone(),
            timestamp: event.timestamp,
        }
    }
}

impl CreateGuardEventRequest {
    pub fn into_new(self, server_id: &str) -> NewGuardEvent {
        NewGuardEvent {
            server_id: server_id.to_string(),
            user_id: self.user_id,
            username: self.username,
            event_type: self.event_type,
            action: self.action,
            details: self.details,
        }
    }
}

// ============================================================================
// Command Mappers
// ============================================================================

impl From<&Command> for CommandResponse {
    fn from(command: &Command) -> Self {
        Self {
            id: command.id,
            name: command.name.clone(),
            category: command.category.clone(),
            description: command.description.clone(),
            usage: command.usage.clone(),
            enabled: command.enabled,
        }
    }
}

impl From<CreateCommandRequest> for NewCommand {
    fn from(request: CreateCommandRequest) -> Self {
        Self {
            name: request.name,
            category: request.category,
            description: request.description,
            usage: request.usage,
            enabled: request.enabled,
        }
    }
}

impl From<UpdateCommandRequest> for CommandPatch {
    fn from(request: UpdateCommandRequest) -> Self {
        Self {
            name: request.name,
            category: request.category,
            description: request.description,
            usage: request.usage,
            enabled: request.enabled,
        }
    }
}

// ============================================================================
// Config Mappers
// ============================================================================

impl From<&AppConfig> for PublicConfigResponse {
    fn from(config: &AppConfig) -> Self {
        Self {
            client_id: config.discord.client_id.clone(),
            prefix: config.discord.prefix.clone(),
            website_url: config.website.url.clone(),
            support_server: config.meta.support_server.clone(),
            version: config.meta.version.clone(),
            sounds: config.sounds.clone(),
        }
    }
}
