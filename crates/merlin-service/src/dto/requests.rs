//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names are camelCase on the wire.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use validator::Validate;

/// Longest mute Discord allows (28 days)
pub const MAX_MUTE_TIME_SECS: i32 = 2_419_200;

/// Keep "absent" and "null" apart for nullable fields
///
/// Use with `#[serde(default, deserialize_with = "nullable")]`: an absent key
/// stays `None`, an explicit `null` becomes `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,
}

// ============================================================================
// Server Requests
// ============================================================================

/// Register a server with the dashboard
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServerRequest {
    /// Guild id; generated when omitted
    #[validate(length(min = 1, max = 64, message = "Server id must be 1-64 characters"))]
    pub id: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Server name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 10, message = "Prefix must be 1-10 characters"))]
    pub prefix: Option<String>,

    pub log_channel_id: Option<String>,

    pub welcome_channel_id: Option<String>,

    #[validate(length(max = 2000, message = "Welcome message must be at most 2000 characters"))]
    pub welcome_message: Option<String>,
}

/// Partial server update; nullable fields accept `null` to clear
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServerRequest {
    #[validate(length(min = 1, max = 100, message = "Server name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 10, message = "Prefix must be 1-10 characters"))]
    pub prefix: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub log_channel_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable")]
    pub welcome_channel_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(max = 2000, message = "Welcome message must be at most 2000 characters"))]
    pub welcome_message: Option<Option<String>>,
}

// ============================================================================
// Guard Requests
// ============================================================================

/// Create guard settings; omitted fields take the defaults
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuardSettingsRequest {
    pub anti_spam: Option<bool>,
    pub anti_raid: Option<bool>,
    pub anti_link: Option<bool>,
    pub captcha: Option<bool>,

    #[validate(range(min = 1, max = 100, message = "maxWarnings must be 1-100"))]
    pub max_warnings: Option<i32>,

    #[validate(range(min = 0, max = 2_419_200, message = "muteTime must be 0-2419200 seconds"))]
    pub mute_time: Option<i32>,

    pub settings: Option<Map<String, Value>>,
}

/// Partial guard settings update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuardSettingsRequest {
    pub anti_spam: Option<bool>,
    pub anti_raid: Option<bool>,
    pub anti_link: Option<bool>,
    pub captcha: Option<bool>,

    #[validate(range(min = 1, max = 100, message = "maxWarnings must be 1-100"))]
    pub max_warnings: Option<i32>,

    #[validate(range(min = 0, max = 2_419_200, message = "muteTime must be 0-2419200 seconds"))]
    pub mute_time: Option<i32>,

    /// Replaces the whole map
    pub settings: Option<Map<String, Value>>,
}

// ============================================================================
// Log Requests
// ============================================================================

/// Record an activity log entry
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityLogRequest {
    pub user_id: Option<String>,

    pub username: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Action must be 1-100 characters"))]
    pub action: String,

    pub details: Option<String>,
}

/// Record a guard event
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuardEventRequest {
    pub user_id: Option<String>,

    pub username: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Event type must be 1-50 characters"))]
    pub event_type: String,

    #[validate(length(min = 1, max = 100, message = "Action must be 1-100 characters"))]
    pub action: String,

    pub details: Option<String>,
}

// ============================================================================
// Command Requests
// ============================================================================

/// Add a command to the catalog
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommandRequest {
    #[validate(length(min = 1, max = 32, message = "Command name must be 1-32 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 32, message = "Category must be 1-32 characters"))]
    pub category: String,

    #[validate(length(min = 1, max = 200, message = "Description must be 1-200 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 200, message = "Usage must be 1-200 characters"))]
    pub usage: String,

    pub enabled: Option<bool>,
}

/// Partial command update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCommandRequest {
    #[validate(length(min = 1, max = 32, message = "Command name must be 1-32 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 32, message = "Category must be 1-32 characters"))]
    pub category: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Description must be 1-200 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Usage must be 1-200 characters"))]
    pub usage: Option<String>,

    pub enabled: Option<bool>,
}
