use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use backend_lib::{config::Settings, router::create_router, storage::FlatFileStore, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .init();

    let storage = FlatFileStore::new(&settings.data_dir)?;
    let state = Arc::new(AppState::new(storage, settings)?);

    // sweep for sessions whose tokens are never presented again; presented
    // tokens expire lazily on access
    let auth = Arc::clone(&state.auth);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60 * 60));
        loop {
            interval.tick().await;
            match auth.purge_expired().await {
                Ok(0) => {},
                Ok(removed) => info!(removed, "purged expired sessions"),
                Err(err) => warn!(%err, "session purge failed"),
            }
        }
    });

    let addr = state.settings.bind_addr;
    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
