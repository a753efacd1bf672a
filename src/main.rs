//! Housekeeping Backend
//!
//! Backend service for the hotel housekeeping PWA: per-room cleaning status,
//! notes, tasks, and checklists over a JSON API, plus the installable app
//! shell surface (manifest, service worker, offline page).

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod modules;
mod occupancy;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::{AllowAll, PermissionOracle, StaticGrants};
use config::Config;
use db::Repository;
use modules::room_status::RoomStatusModule;
use modules::ModuleRegistry;
use occupancy::{OccupancySource, SampleOccupancySource};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub registry: Arc<ModuleRegistry>,
    pub room_status: Arc<RoomStatusModule>,
    pub occupancy: Arc<dyn OccupancySource>,
    pub oracle: Arc<dyn PermissionOracle>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Housekeeping Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn when auth is effectively disabled
    if config.session_token.is_none() {
        tracing::warn!("No session token configured (HK_SESSION_TOKEN). Authentication is disabled!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Permission oracle: static grants file, or allow-all in dev mode
    let oracle: Arc<dyn PermissionOracle> = match &config.grants_path {
        Some(path) => {
            tracing::info!("Loading permission grants from {:?}", path);
            Arc::new(StaticGrants::from_file(path)?)
        }
        None => {
            tracing::warn!("No grants file configured (HK_GRANTS_PATH). All permissions granted!");
            Arc::new(AllowAll)
        }
    };

    // Occupancy integration: the property-management client plugs in here;
    // without one the sample source keeps the room view demonstrable.
    let occupancy: Arc<dyn OccupancySource> = Arc::new(SampleOccupancySource);

    // Module catalog
    let room_status = Arc::new(RoomStatusModule);
    let mut registry = ModuleRegistry::new();
    registry.register(room_status.clone())?;

    // Create application state
    let state = AppState {
        repo,
        registry: Arc::new(registry),
        room_status,
        occupancy,
        oracle,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone the token for the auth layer
    let token = state.config.session_token.clone();

    // API routes: token + identity checked before any handler runs
    let api_routes = Router::new()
        // Rooms
        .route("/rooms", get(api::get_rooms))
        .route("/rooms/status", get(api::get_room_status))
        .route("/rooms/status", post(api::update_room_status))
        .route("/rooms/assign", post(api::assign_room))
        // Notes
        .route("/rooms/notes", get(api::get_room_notes))
        .route("/rooms/notes", post(api::add_room_note))
        .route("/notes/{id}/resolve", post(api::resolve_note))
        // Tasks
        .route("/tasks", get(api::get_tasks))
        .route("/tasks", post(api::create_task))
        .route("/tasks/{id}/complete", post(api::complete_task))
        // Checklists
        .route("/checklists", get(api::get_checklist))
        .route("/checklists", post(api::save_checklist))
        // Module catalog
        .route("/modules", get(api::get_modules))
        // Apply session auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::session_auth_layer(token.clone(), req, next)
        }));

    // PWA surface and health check (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/manifest.json", get(api::get_manifest))
        .route("/service-worker.js", get(api::get_service_worker))
        .route("/offline.html", get(api::get_offline_page));

    Router::new()
        .nest("/api", api_routes)
        .merge(public_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
