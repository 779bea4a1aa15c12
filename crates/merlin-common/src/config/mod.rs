//! Configuration structs

mod app_config;
mod patch;

pub use app_config::{
    AppConfig, AppSettings, BotConfig, ConfigError, CorsConfig, DatabaseConfig, DiscordConfig,
    Environment, MetaConfig, RateLimitConfig, SeedConfig, ServerConfig, SessionConfig,
    WebsiteConfig,
};
pub use patch::{ConfigPatch, DatabasePatch, DiscordPatch, MetaPatch, WebsitePatch};
