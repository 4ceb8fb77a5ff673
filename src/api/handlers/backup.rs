//! Handler for the on-demand backup trigger.

use axum::{extract::State, http::StatusCode};
use serde_json::json;
use tracing::{error, info};

use crate::error::AppError;
use crate::infrastructure::persistence;
use crate::state::AppState;

/// Writes the full store to the backup file.
///
/// # Endpoint
///
/// `GET /backup` (maintenance listener)
///
/// Clones a snapshot under the read lock and writes it on the blocking
/// pool, so a concurrent insert can never tear a backup line. A failed
/// write is surfaced as 500 and logged; the process keeps running.
pub async fn backup_handler(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let snapshot = state.store.read().await.clone();
    let records = snapshot.len();
    let path = state.store_path.clone();

    let result = tokio::task::spawn_blocking(move || persistence::backup(&snapshot, &path))
        .await
        .map_err(|e| {
            error!("backup task failed to run: {e}");
            AppError::internal("Backup task failed", json!({}))
        })?;

    match result {
        Ok(()) => {
            info!(records, path = %state.store_path.display(), "store backed up");
            Ok(StatusCode::OK)
        }
        Err(e) => {
            error!("backup write failed: {e}");
            Err(e.into())
        }
    }
}
