//! Server initialization and runtime setup.
//!
//! Loads the store from its backup, spawns the periodic clear task and the
//! maintenance listener, and runs the public listener until shutdown. On
//! graceful shutdown a final backup is written so the in-memory state
//! survives a restart.

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

use crate::config::Config;
use crate::infrastructure::persistence;
use crate::routes::{app_router, maintenance_router};
use crate::state::{AppState, SharedStore};

/// Runs the service with the given configuration.
///
/// # Errors
///
/// Returns an error if the backup file cannot be read at startup, either
/// bind fails, or the server runtime errors out.
pub async fn run(config: Config) -> Result<()> {
    let store = persistence::load(&config.store_path)?;
    tracing::info!(
        records = store.len(),
        path = %config.store_path.display(),
        "Loaded url store"
    );

    let state = AppState::new(store, config.store_path.clone(), config.max_rehash_attempts);

    if config.clear_interval_secs > 0 {
        tokio::spawn(run_clear_task(
            state.store.clone(),
            Duration::from_secs(config.clear_interval_secs),
        ));
        tracing::info!("Clear task started");
    }

    let maintenance = maintenance_router(state.clone());
    let maintenance_addr: SocketAddr = config.maintenance_addr.parse()?;
    let maintenance_listener = tokio::net::TcpListener::bind(maintenance_addr).await?;
    tracing::info!("Maintenance listening on http://{maintenance_addr}");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(maintenance_listener, maintenance).await {
            tracing::error!("maintenance server error: {e}");
        }
    });

    let app = app_router(state.clone());
    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Last chance to persist before the process exits.
    let snapshot = state.store.read().await.clone();
    match persistence::backup(&snapshot, &config.store_path) {
        Ok(()) => tracing::info!(records = snapshot.len(), "Final backup written"),
        Err(e) => tracing::error!("final backup failed: {e}"),
    }

    Ok(())
}

/// Clears the whole store on a fixed interval.
///
/// The clear takes the write lock, so it serializes with in-flight
/// assignments: whichever acquires the lock first runs to completion, and
/// an assignment landing after a clear repopulates the fresh map.
async fn run_clear_task(store: SharedStore, every: Duration) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; skip it so a fresh start does
    // not clear what was just loaded.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let mut store = store.write().await;
        let dropped = store.len();
        store.clear();
        tracing::info!(dropped, "url store cleared");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
