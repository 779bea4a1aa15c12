//! Error handling utilities for repositories

use merlin_core::error::DomainError;

use crate::store::Tables;

/// Create a "server not found" error
pub fn server_not_found(id: &str) -> DomainError {
    DomainError::ServerNotFound(id.to_string())
}

/// Reject child records that point at an unknown server
pub fn ensure_server(tables: &Tables, server_id: &str) -> Result<(), DomainError> {
    if tables.server_exists(server_id) {
        Ok(())
    } else {
        Err(server_not_found(server_id))
    }
}
