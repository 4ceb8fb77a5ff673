//! Health check handler.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Records currently held in the store.
    pub records: usize,
}

/// Liveness probe with the current store size.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let records = state.store.read().await.len();

    Json(HealthResponse {
        status: "ok",
        records,
    })
}
