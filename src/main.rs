use std::sync::Arc;

use anyhow::Context;
use career_path_api::app::{app, AppState};
use career_path_api::config;
use career_path_api::database::{DatabaseManager, PgRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    career_path_api::init_tracing();

    let config = config::config().clone();
    config.validate().map_err(anyhow::Error::msg)?;
    tracing::info!("Starting Career Path API in {:?} mode", config.environment);
    if config.security.legacy_compat {
        tracing::warn!("Legacy-compat mode: passwords are stored and returned in plaintext");
    }

    let pool = DatabaseManager::connect_lazy(&config.database)?;
    DatabaseManager::ensure_schema(&pool)
        .await
        .context("failed to prepare database schema")?;

    let bind_addr = config.bind_address();
    let state = AppState::new(Arc::new(PgRepository::new(pool.clone())), Arc::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Career Path API listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
