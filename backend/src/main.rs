mod config;
mod cors;
mod db;
mod error;
mod records;
mod routes;
mod timestamp;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use db::{DocumentStore, DynDocumentStore, PgDocumentStore};
use records::SystemStamper;
use routes::{build_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load configuration
    let cfg = config::load().context("failed to load configuration")?;
    info!("Starting backend in {:?} mode", cfg.env);

    // 3. Connect to the document store
    let pool = db::create_pool(&cfg.database_url, &cfg.database_name)
        .await
        .context("failed to connect to Postgres")?;
    info!("Connected to Postgres database '{}'", cfg.database_name);

    let pg_store = PgDocumentStore::new(pool);
    pg_store
        .ensure_schema()
        .await
        .context("failed to prepare document schema")?;
    let store: DynDocumentStore = Arc::new(pg_store);

    // 4. Build application state
    let state = AppState {
        store: store.clone(),
        stamper: Arc::new(SystemStamper),
        env: cfg.env,
    };

    // 5. Build router
    let app = build_router(state, &cfg.cors_origins);

    // 6. Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.http_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // 7. Release the store once in-flight requests have drained, even if serving failed
    store.close().await;
    info!("Database connections closed, shutdown complete");

    served.context("HTTP server error")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => info!("Received SIGTERM, shutting down gracefully"),
    }
}
