//! # merlin-common
//!
//! Shared utilities including configuration, error handling, password hashing, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, PasswordService};
pub use crate::config::{
    AppConfig, AppSettings, BotConfig, ConfigError, ConfigPatch, CorsConfig, DatabaseConfig,
    DatabasePatch, DiscordConfig, DiscordPatch, Environment, MetaConfig, MetaPatch,
    RateLimitConfig, SeedConfig, ServerConfig, SessionConfig, WebsiteConfig, WebsitePatch,
};
pub use error::AppError;
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
