//! utsav-gateway server entry point.
//!
//! Starts the Axum HTTP server with REST and WebSocket endpoints.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use utsav_gateway::api;
use utsav_gateway::app_state::AppState;
use utsav_gateway::config::PlannerConfig;
use utsav_gateway::domain::{EventBus, WeddingRegistry};
use utsav_gateway::engine::status::StatusPolicy;
use utsav_gateway::persistence::postgres::PostgresPersistence;
use utsav_gateway::persistence::recorder;
use utsav_gateway::service::PlanningService;
use utsav_gateway::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = PlannerConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting utsav-gateway");

    // Build domain layer
    let registry = Arc::new(WeddingRegistry::new());
    let event_bus = EventBus::new(config.event_bus_capacity);

    // Build service layer
    let policy = StatusPolicy::with_buffer_minutes(config.vendor_buffer_minutes);
    let planning_service = Arc::new(PlanningService::new(
        Arc::clone(&registry),
        event_bus.clone(),
        policy,
    ));

    // Wire persistence, best-effort: the in-memory service runs without it.
    if config.persistence_enabled {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(std::time::Duration::from_secs(
                config.database_connect_timeout_secs,
            ))
            .connect(&config.database_url)
            .await;
        match pool {
            Ok(pool) => {
                let persistence = PostgresPersistence::new(pool);
                if config.event_log_enabled {
                    recorder::spawn_event_recorder(persistence.clone(), event_bus.subscribe());
                }
                recorder::spawn_snapshot_task(
                    persistence,
                    Arc::clone(&registry),
                    config.snapshot_interval_secs,
                    config.cleanup_after_days,
                );
                tracing::info!("persistence layer online");
            }
            Err(e) => {
                tracing::warn!(error = %e, "persistence unavailable, continuing in-memory only");
            }
        }
    }

    // Build application state
    let app_state = AppState {
        planning_service,
        event_bus,
        default_hotels: Arc::new(config.default_hotels.clone()),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
