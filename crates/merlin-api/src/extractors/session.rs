//! Typed access to the login state kept in the server-side session.

use tower_sessions::Session;

use crate::response::ApiError;

/// Session key holding the logged-in user's id
pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication view over a `tower-sessions` session
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Bind the session to a user after a successful login
    ///
    /// The session id is rotated first so an id handed out before login
    /// cannot be reused to ride the authenticated session.
    pub async fn log_in(&self, user_id: i32) -> Result<(), ApiError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// The user id stored in the session, if any
    pub async fn user_id(&self) -> Result<Option<i32>, ApiError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Drop the session record and expire the cookie
    pub async fn log_out(&self) -> Result<(), ApiError> {
        self.session.flush().await?;
        Ok(())
    }
}
