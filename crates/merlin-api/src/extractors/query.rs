//! `?limit=` extractor for the newest-first log listings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Entries returned when no limit is given
pub const DEFAULT_LIMIT: usize = merlin_core::DEFAULT_LOG_LIMIT;

/// Raw query parameters
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    #[serde(default)]
    pub limit: Option<String>,
}

/// Validated listing limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitQuery {
    pub limit: usize,
}

impl Default for LimitQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl TryFrom<LimitParams> for LimitQuery {
    type Error = ApiError;

    fn try_from(params: LimitParams) -> Result<Self, Self::Error> {
        let Some(raw) = params.limit.filter(|raw| !raw.trim().is_empty()) else {
            return Ok(Self::default());
        };

        let limit = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ApiError::invalid_query(format!("'limit' must be a non-negative integer, got '{raw}'")))?;

        Ok(Self { limit })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for LimitQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<LimitParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        LimitQuery::try_from(params)
    }
}
