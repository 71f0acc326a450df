// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::dataset_cache::DatasetCache;
use crate::application::dispatch_service::DispatchService;
use crate::application::unit_service::UnitService;
use crate::infrastructure::config::load_monitor_config;
use crate::infrastructure::csv_repository::CsvRepository;
use crate::infrastructure::simulated_backend::SimulatedRescueBackend;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_monitor_config()?;

    // Create repository and cache (infrastructure layer)
    let repository = Arc::new(CsvRepository::new(config.data.base_dir.clone()));
    let cache = DatasetCache::new(repository);

    // Create services (application layer)
    let unit_service = UnitService::new(config.units);
    let dashboard_service =
        DashboardService::new(cache, unit_service.clone(), config.data, config.map);
    let dispatch_service = DispatchService::new(
        Arc::new(SimulatedRescueBackend::new(Duration::from_millis(config.dispatch.delay_ms))),
        Duration::from_millis(config.dispatch.timeout_ms),
    );

    // Create application state
    let state = Arc::new(AppState {
        unit_service,
        dashboard_service,
        dispatch_service,
    });

    // Build router (presentation layer)
    // Note: JSON bodies are compressed in the response builders, not by a layer
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", config.server.bind))?;
    tracing::info!("Starting vitals-monitor service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
