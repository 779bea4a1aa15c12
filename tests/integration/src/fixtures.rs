//! Test fixtures and data generators
//!
//! Provides reusable request bodies and typed views of API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Login and registration body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn unique() -> Self {
        Self {
            username: format!("mod{}", unique_suffix()),
            password: "hunter2".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub is_admin: bool,
}

#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub is_logged_in: bool,
    pub user: Option<UserResponse>,
}

#[derive(Debug, Deserialize)]
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

#[derive(Debug, Deserialize)]
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
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogResponse {
    pub id: i32,
    pub server_id: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardEventResponse {
    pub id: i32,
    pub server_id: String,
    pub event_type: String,
    pub action: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub usage: String,
    pub enabled: bool,
}

/// Body for registering a server with a fixed id
pub fn server_body(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

/// Body for an activity log entry
pub fn activity_body(action: &str) -> Value {
    json!({ "userId": "42", "username": "someone", "action": action })
}
