//! # merlin-api
//!
//! Session-authenticated REST API for the Merlin moderation dashboard,
//! built with Axum.

pub mod bot;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
