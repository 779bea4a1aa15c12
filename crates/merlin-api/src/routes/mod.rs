//! Route definitions
//!
//! All dashboard routes are mounted under /api; the liveness probe sits at
//! the root so it can bypass rate limiting.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{activity, auth, commands, guard, health, meta, servers};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(server_routes())
        .merge(command_routes())
        .route("/config", get(meta::public_config))
}

/// Login, logout, session and registration
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/session", get(auth::session))
        .route("/register", post(auth::register))
}

/// Servers and their guard settings, activity and guard events
fn server_routes() -> Router<AppState> {
    Router::new()
        .route("/servers", get(servers::list_servers).post(servers::create_server))
        .route(
            "/servers/:server_id",
            get(servers::get_server).patch(servers::update_server),
        )
        .route(
            "/servers/:server_id/guard",
            get(guard::get_guard_settings)
                .post(guard::create_guard_settings)
                .patch(guard::update_guard_settings),
        )
        .route(
            "/servers/:server_id/activity",
            get(activity::list_activity).post(activity::record_activity),
        )
        .route(
            "/servers/:server_id/guard-events",
            get(activity::list_guard_events).post(activity::record_guard_event),
        )
}

/// Command catalog
fn command_routes() -> Router<AppState> {
    Router::new()
        .route("/commands", get(commands::list_commands).post(commands::create_command))
        .route(
            "/commands/:id",
            get(commands::get_command).patch(commands::update_command),
        )
        .route("/commands/name/:name", get(commands::get_command_by_name))
        .route(
            "/commands/category/:category",
            get(commands::list_commands_by_category),
        )
}
