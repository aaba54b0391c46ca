//! Cars API - CRUD service for car records
//!
//! Serves car records from a relational store with an in-memory
//! read-through TTL cache in front of single-record reads.

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cars_api::api::create_router;
use cars_api::repository::{database, SqliteCarStore};
use cars_api::{AppState, Config};

/// Main entry point for the cars service.
///
/// # Startup Sequence
/// 1. Load configuration from environment variables
/// 2. Initialize tracing subscriber for logging
/// 3. Connect to the database and create the schema
/// 4. Wire the store, service and cache together
/// 5. Start HTTP server on configured address
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL when set
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("cars_api={0},tower_http={0}", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cars API");
    info!(
        "Configuration loaded: addr={}, cache_ttl={}s, invalidate_on_delete={}, max_connections={}",
        config.bind_addr(),
        config.cache_ttl_seconds,
        config.cache_invalidate_on_delete,
        config.database_max_connections
    );

    let pool = database::connect(&config.database_url, config.database_max_connections)
        .await
        .context("can not initialize database")?;

    let store = SqliteCarStore::new(pool);
    store
        .init_schema()
        .await
        .context("can not create cars table")?;

    let state = AppState::cached(store, &config);
    info!("Car service and cache initialized");

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("can not bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("can not start server")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
