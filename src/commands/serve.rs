//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, DisabledFilmsLookup, FilmsLookup, SwapiClient};

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }

    // Initialize database
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
    let db = Arc::new(db);

    // Film-count enrichment
    let films: Arc<dyn FilmsLookup> = if args.offline || !config.enrichment_enabled {
        tracing::warn!("SWAPI enrichment disabled, new planets get 0 films");
        Arc::new(DisabledFilmsLookup)
    } else {
        tracing::info!(swapi_url = %config.swapi_url, "SWAPI enrichment enabled");
        Arc::new(SwapiClient::from_config(&config)?)
    };

    let app_state = AppState::from_database(db, films);

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
