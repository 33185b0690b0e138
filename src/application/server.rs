use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::application::routes::app_router;
use crate::application::state::{AppState, AppStateConfig};

pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub cover_cache_capacity: usize,
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new(AppStateConfig {
        cover_cache_capacity: config.cover_cache_capacity,
        ..AppStateConfig::default()
    });

    let book_count = state
        .book_repo
        .list_all()
        .await
        .context("failed to load catalog")?
        .len();

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;

    let app = app_router(state);

    info!(
        address = %config.bind_address,
        books = book_count,
        cover_cache_capacity = config.cover_cache_capacity,
        "starting HTTP server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server shutdown complete");

    Ok(())
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if signal handlers fail
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
