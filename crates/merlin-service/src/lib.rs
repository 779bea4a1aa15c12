//! # merlin-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ActivityLogResponse, CommandResponse, CreateActivityLogRequest, CreateCommandRequest,
    CreateGuardEventRequest, CreateGuardSettingsRequest, CreateServerRequest, GuardEventResponse,
    GuardSettingsResponse, HealthResponse, LoginRequest, PublicConfigResponse, RegisterRequest,
    RegisterResponse, ServerResponse, SessionResponse, UpdateCommandRequest,
    UpdateGuardSettingsRequest, UpdateServerRequest, UserEnvelope, UserResponse,
};
pub use services::{
    ActivityService, AuthService, Authenticator, CommandService, GuardService, MetaService,
    ServerService, ServiceContext, ServiceError, ServiceResult,
};
