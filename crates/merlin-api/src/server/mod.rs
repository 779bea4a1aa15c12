//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use merlin_common::{AppConfig, AppError, PasswordService};
use merlin_core::NewUser;
use merlin_service::ServiceContext;
use merlin_store::{seed_initial_data, MemoryStore};
use tokio::net::TcpListener;
use tracing::info;

use crate::bot::spawn_bot;
use crate::middleware::{apply_middleware_with_config, session_layer};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let is_production = config.app.env.is_production();

    let router = create_router().layer(session_layer(&config.session, is_production));
    let router = apply_middleware_with_config(router, &config.rate_limit, &config.cors, is_production);

    router.merge(health_routes()).with_state(state)
}

/// Initialize the store, seed it, and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let config = Arc::new(config);
    let store = MemoryStore::new();
    info!(backend = %config.database.kind, "Storage initialized");

    if config.seed.enabled {
        let password_hash = PasswordService::new().hash(&config.seed.admin_password)?;
        let admin = NewUser::new(config.seed.admin_username.clone(), password_hash);
        let summary = seed_initial_data(&store.users(), &store.commands(), admin).await?;
        info!(
            admin_created = summary.admin_created,
            commands_created = summary.commands_created,
            "Initial data seeded"
        );
    }

    let service_context = ServiceContext::in_memory(&store, Arc::clone(&config));

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {}: {e}", config.api.address())))?;

    // The bot runs beside the API; its fate never stops the server
    let _bot = spawn_bot(&config.bot);

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
