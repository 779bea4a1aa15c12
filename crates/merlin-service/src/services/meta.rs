//! Meta service
//!
//! Public bot metadata and liveness.

use crate::dto::{HealthResponse, PublicConfigResponse};

use super::context::ServiceContext;

/// Bot metadata service
pub struct MetaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MetaService<'a> {
    /// Create a new MetaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public subset of the loaded configuration
    pub fn public_config(&self) -> PublicConfigResponse {
        PublicConfigResponse::from(self.ctx.config())
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse::healthy(self.ctx.config().meta.version.clone())
    }
}
