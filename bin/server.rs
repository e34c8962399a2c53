// Receipt Processor - Web Server
// POST /receipts/process, GET /receipts/:id/points

use anyhow::{Context, Result};
use clap::Parser;
use receipt_processor::api::{router, AppState};
use receipt_processor::config::ServerConfig;
use receipt_processor::logging::init_server_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    init_server_logger(config.verbose);

    let addr = config.socket_addr()?;
    let app = router(AppState::default());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(%addr, version = receipt_processor::VERSION, "Receipt processor listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Receipt processor stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
