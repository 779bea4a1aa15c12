//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i32),

    #[error("Server not found: {0}")]
    ServerNotFound(String),

    #[error("Guard settings not found for server: {0}")]
    GuardSettingsNotFound(String),

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use: {0}")]
    UsernameTaken(String),

    #[error("Server already exists: {0}")]
    ServerAlreadyExists(String),

    #[error("Guard settings already exist for server: {0}")]
    GuardSettingsAlreadyExist(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ServerNotFound(_) => "UNKNOWN_SERVER",
            Self::GuardSettingsNotFound(_) => "UNKNOWN_GUARD_SETTINGS",
            Self::CommandNotFound(_) => "UNKNOWN_COMMAND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidUsername(_) => "INVALID_USERNAME",

            // Conflict
            Self::UsernameTaken(_) => "USERNAME_TAKEN",
            Self::ServerAlreadyExists(_) => "SERVER_ALREADY_EXISTS",
            Self::GuardSettingsAlreadyExist(_) => "GUARD_SETTINGS_ALREADY_EXIST",

            // Infrastructure
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ServerNotFound(_)
                | Self::GuardSettingsNotFound(_)
                | Self::CommandNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidUsername(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken(_) | Self::ServerAlreadyExists(_) | Self::GuardSettingsAlreadyExist(_)
        )
    }
}
