//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase
//! field names. Nullable columns serialize as `null` rather than being
//! omitted. Password hashes never appear here.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

// ============================================================================
// Auth Responses
// ============================================================================

/// Dashboard user, without credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub is_admin: bool,
}

/// `{ "user": ... }` envelope returned by login
#[derive(Debug, Clone, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// Registration result
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

impl RegisterResponse {
    pub fn new(user: UserResponse) -> Self {
        Self {
            message: "Registration successful".to_string(),
            user,
        }
    }
}

/// Current session state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub is_logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

impl SessionResponse {
    pub fn anonymous() -> Self {
        Self {
            is_logged_in: false,
            user: None,
        }
    }

    pub fn logged_in(user: UserResponse) -> Self {
        Self {
            is_logged_in: true,
            user: Some(user),
        }
    }
}

// ============================================================================
// Server Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerResponse {
    pub id: String,
    pub name: String,
    pub prefix: String,
    pub log_channel_id: Option<String>,
    pub welcome_channel_id: Option<String>,
    pub welcome_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardSettingsResponse {
    pub id: i32,
    pub server_id: String,
    pub anti_spam: bool,
    pub anti_raid: bool,
    pub anti_link: bool,
    pub captcha: bool,
    pub max_warnings: i32,
    pub mute_time: i32,
    pub settings: Map<String, Value>,
}

// ============================================================================
// Log Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogResponse {
    pub id: i32,
    pub server_id: String,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub action: String,
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardEventResponse {
    pub id: i32,
    pub server_id: String,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub event_type: String,
    pub action: String,
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Command Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CommandResponse {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub usage: String,
    pub enabled: bool,
}

// ============================================================================
// Config / Health Responses
// ============================================================================

/// Public bot metadata for the dashboard front page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfigResponse {
    pub client_id: String,
    pub prefix: String,
    pub website_url: String,
    pub support_server: String,
    pub version: String,
    pub sounds: BTreeMap<String, String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}
