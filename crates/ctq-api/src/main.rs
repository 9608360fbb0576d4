use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use ctq_api::config::ApiConfig;
use ctq_api::state::AppState;
use ctq_api::store::MemoryStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;

    let store = match &config.store_path {
        Some(path) => MemoryStore::load(path)?,
        None => MemoryStore::seeded()?,
    };
    let instrument = ctq_instruments::load_instrument(
        ctq_instruments::instruments::ctq_sf::ID,
        config.scoring_table.as_deref(),
    )?;

    let state = AppState {
        store: Arc::new(store),
        instrument: Arc::from(instrument),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, ctq_api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
