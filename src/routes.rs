//! Router configuration for the public and maintenance listeners.
//!
//! # Route Structure
//!
//! Public listener:
//! - `POST /shorten` - Assign a short identifier to a URL
//! - `GET  /{code}`  - Redirect to the original URL
//! - `GET  /health`  - Liveness probe
//!
//! Maintenance listener (separate port, see [`crate::server`]):
//! - `GET  /backup`  - Write the store to the backup file

use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{backup_handler, health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the public router with tracing and trailing-slash
/// normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Constructs the maintenance router served on its own port.
pub fn maintenance_router(state: AppState) -> Router {
    Router::new()
        .route("/backup", get(backup_handler))
        .with_state(state)
        .layer(tracing::layer())
}
