//! Axum extractors for request handling
//!
//! Custom extractors for session authentication, validation, and query
//! parameters.

mod auth;
mod path;
mod query;
mod session;
mod validated;

pub use auth::{AdminUser, AuthUser};
pub use path::ValidPath;
pub use query::{LimitParams, LimitQuery, DEFAULT_LIMIT};
pub use session::{AuthSession, SESSION_AUTH_USER_ID};
pub use validated::ValidatedJson;
