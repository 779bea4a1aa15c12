//! Activity service
//!
//! Activity logs and guard events: append-only, read newest first.

use tracing::{debug, instrument};

use crate::dto::{
    ActivityLogResponse, CreateActivityLogRequest, CreateGuardEventRequest, GuardEventResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Activity log and guard event service
pub struct ActivityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActivityService<'a> {
    /// Create a new ActivityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Most recent activity for a server, newest first
    #[instrument(skip(self))]
    pub async fn list_activity(
        &self,
        server_id: &str,
        limit: usize,
    ) -> ServiceResult<Vec<ActivityLogResponse>> {
        let logs = self
            .ctx
            .activity_log_repo()
            .find_by_server(server_id, limit)
            .await?;

        Ok(logs.iter().map(ActivityLogResponse::from).collect())
    }

    /// Append an activity log entry
    #[instrument(skip(self, request), fields(action = %request.action))]
    pub async fn record_activity(
        &self,
        server_id: &str,
        request: CreateActivityLogRequest,
    ) -> ServiceResult<ActivityLogResponse> {
        let log = self
            .ctx
            .activity_log_repo()
            .create(request.into_new(server_id))
            .await?;

        debug!(log_id = log.id, "Activity recorded");

        Ok(ActivityLogResponse::from(&log))
    }

    /// Most recent guard events for a server, newest first
    #[instrument(skip(self))]
    pub async fn list_guard_events(
        &self,
        server_id: &str,
        limit: usize,
    ) -> ServiceResult<Vec<GuardEventResponse>> {
        let events = self
            .ctx
            .guard_event_repo()
            .find_by_server(server_id, limit)
            .await?;

        Ok(events.iter().map(GuardEventResponse::from).collect())
    }

    /// Append a guard event
    #[instrument(skip(self, request), fields(event_type = %request.event_type))]
    pub async fn record_guard_event(
        &self,
        server_id: &str,
        request: CreateGuardEventRequest,
    ) -> ServiceResult<GuardEventResponse> {
        let event = self
            .ctx
            .guard_event_repo()
            .create(request.into_new(server_id))
            .await?;

        debug!(event_id = event.id, "Guard event recorded");

        Ok(GuardEventResponse::from(&event))
    }
}
