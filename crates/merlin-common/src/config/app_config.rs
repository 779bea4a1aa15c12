//! Application configuration structs
//!
//! Loads configuration from environment variables, then layers an optional
//! patch file (`CONFIG_FILE`) on top.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use super::patch::ConfigPatch;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub session: SessionConfig,
    pub discord: DiscordConfig,
    pub website: WebsiteConfig,
    pub meta: MetaConfig,
    /// Sound name to URL
    pub sounds: BTreeMap<String, String>,
    pub database: DatabaseConfig,
    pub bot: BotConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub seed: SeedConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Inactivity expiry in seconds
    #[serde(default = "default_session_max_age")]
    pub max_age_secs: i64,
}

/// Discord application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    #[serde(default = "default_client_id")]
    pub client_id: String,
    /// Default command prefix announced to new servers
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

/// Public website settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteConfig {
    #[serde(default = "default_website_url")]
    pub url: String,
}

/// Bot metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_support_server")]
    pub support_server: String,
}

/// Storage backend selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(rename = "type", default = "default_database_type")]
    pub kind: String,
}

/// External bot process
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    /// Executable to launch at startup; `None` disables the launcher
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Initial data loaded into an empty store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

// Default value functions
fn default_app_name() -> String {
    "merlin-dashboard".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cookie_name() -> String {
    "merlin.sid".to_string()
}

fn default_session_max_age() -> i64 {
    86_400 // 24 hours
}

fn default_client_id() -> String {
    "123456789012345678".to_string()
}

fn default_prefix() -> String {
    "!".to_string()
}

fn default_website_url() -> String {
    "https://merlin-bot.com".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_support_server() -> String {
    "https://discord.gg/merlin-support".to_string()
}

fn default_welcome_sound() -> String {
    "https://cdn.freesound.org/previews/521/521641_4921277-lq.mp3".to_string()
}

fn default_database_type() -> String {
    "memory".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_true() -> bool {
    true
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut sounds = BTreeMap::new();
        sounds.insert("welcome".to_string(), default_welcome_sound());

        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::default(),
            },
            api: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            session: SessionConfig {
                cookie_name: default_cookie_name(),
                max_age_secs: default_session_max_age(),
            },
            discord: DiscordConfig {
                client_id: default_client_id(),
                prefix: default_prefix(),
            },
            website: WebsiteConfig {
                url: default_website_url(),
            },
            meta: MetaConfig {
                version: default_version(),
                support_server: default_support_server(),
            },
            sounds,
            database: DatabaseConfig {
                kind: default_database_type(),
            },
            bot: BotConfig::default(),
            rate_limit: RateLimitConfig {
                requests_per_second: default_requests_per_second(),
                burst: default_burst(),
            },
            cors: CorsConfig::default(),
            seed: SeedConfig {
                enabled: true,
                admin_username: default_admin_username(),
                admin_password: default_admin_password(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment, then apply the
    /// patch file named by `CONFIG_FILE` if set
    ///
    /// # Errors
    /// Returns an error if a variable holds an unusable value or the patch
    /// file cannot be read
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_env()?;

        if let Ok(path) = env::var("CONFIG_FILE") {
            let patch = ConfigPatch::from_file(Path::new(&path))?;
            config.merge(patch);
            config.validate()?;
            tracing::info!(path = %path, "Applied configuration file");
        }

        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable holds an unusable value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to
    /// defaults for absent keys
    ///
    /// # Errors
    /// Returns an error if a present value cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(name) = var("APP_NAME") {
            config.app.name = name;
        }
        if let Some(value) = var("APP_ENV") {
            config.app.env = Environment::parse(&value)
                .ok_or(ConfigError::InvalidValue("APP_ENV", value))?;
        }

        if let Some(host) = var("API_HOST") {
            config.api.host = host;
        }
        if let Some(value) = var("API_PORT").or_else(|| var("PORT")) {
            config.api.port = parse_var("API_PORT", &value)?;
        }

        if let Some(name) = var("SESSION_COOKIE_NAME") {
            config.session.cookie_name = name;
        }
        if let Some(value) = var("SESSION_MAX_AGE_SECS") {
            config.session.max_age_secs = parse_var("SESSION_MAX_AGE_SECS", &value)?;
        }

        if let Some(client_id) = var("DISCORD_CLIENT_ID") {
            config.discord.client_id = client_id;
        }
        if let Some(prefix) = var("BOT_PREFIX") {
            config.discord.prefix = prefix;
        }
        if let Some(url) = var("WEBSITE_URL") {
            config.website.url = url;
        }
        if let Some(version) = var("BOT_VERSION") {
            config.meta.version = version;
        }
        if let Some(support) = var("SUPPORT_SERVER") {
            config.meta.support_server = support;
        }
        if let Some(url) = var("WELCOME_SOUND_URL") {
            config.sounds.insert("welcome".to_string(), url);
        }

        if let Some(kind) = var("DATABASE_TYPE") {
            config.database.kind = kind;
        }

        config.bot.command = var("BOT_COMMAND");
        if let Some(args) = var("BOT_ARGS") {
            config.bot.args = args.split_whitespace().map(String::from).collect();
        }

        if let Some(value) = var("RATE_LIMIT_REQUESTS_PER_SECOND") {
            config.rate_limit.requests_per_second =
                parse_var("RATE_LIMIT_REQUESTS_PER_SECOND", &value)?;
        }
        if let Some(value) = var("RATE_LIMIT_BURST") {
            config.rate_limit.burst = parse_var("RATE_LIMIT_BURST", &value)?;
        }

        if let Some(origins) = var("CORS_ALLOWED_ORIGINS") {
            config.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(value) = var("SEED_ENABLED") {
            config.seed.enabled = parse_var("SEED_ENABLED", &value)?;
        }
        if let Some(username) = var("ADMIN_USERNAME") {
            config.seed.admin_username = username;
        }
        if let Some(password) = var("ADMIN_PASSWORD") {
            config.seed.admin_password = password;
        }

        config.validate()?;
        Ok(config)
    }

    /// Merge a partial configuration; only present, non-empty fields
    /// overwrite, and sounds are merged key by key
    pub fn merge(&mut self, patch: ConfigPatch) {
        if let Some(discord) = patch.discord {
            set_if_present(&mut self.discord.client_id, discord.client_id);
            set_if_present(&mut self.discord.prefix, discord.prefix);
        }

        if let Some(website) = patch.website {
            set_if_present(&mut self.website.url, website.url);
            if let Some(port) = website.port.filter(|p| *p != 0) {
                self.api.port = port;
            }
        }

        if let Some(meta) = patch.meta {
            set_if_present(&mut self.meta.version, meta.version);
            set_if_present(&mut self.meta.support_server, meta.support_server);
        }

        if let Some(sounds) = patch.sounds {
            for (name, url) in sounds {
                if !url.is_empty() {
                    self.sounds.insert(name, url);
                }
            }
        }

        if let Some(database) = patch.database {
            set_if_present(&mut self.database.kind, database.kind);
        }
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    /// Returns an error for an unsupported storage backend or a
    /// non-positive session lifetime
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.kind != "memory" {
            return Err(ConfigError::InvalidValue(
                "DATABASE_TYPE",
                format!("unsupported storage backend '{}'", self.database.kind),
            ));
        }
        if self.session.max_age_secs <= 0 {
            return Err(ConfigError::InvalidValue(
                "SESSION_MAX_AGE_SECS",
                self.session.max_age_secs.to_string(),
            ));
        }
        Ok(())
    }
}

fn set_if_present(target: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *target = value;
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key, value.to_string()))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),

    #[error("Failed to read configuration file: {0}")]
    File(#[from] config::ConfigError),

    #[error("Failed to open configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}
