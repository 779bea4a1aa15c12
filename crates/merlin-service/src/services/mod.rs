//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod activity;
pub mod auth;
pub mod command;
pub mod context;
pub mod error;
pub mod guard;
pub mod meta;
pub mod server;

// Re-export all services for convenience
pub use activity::ActivityService;
pub use auth::{AuthService, Authenticator};
pub use command::CommandService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use guard::GuardService;
pub use meta::MetaService;
pub use server::ServerService;
