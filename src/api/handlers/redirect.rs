//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with 303 See Other. An unknown identifier is a 404, never a
/// crash.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let store = state.store.read().await;

    match store.get(&code) {
        Some(record) => {
            debug!(id = %code, "redirecting");
            Ok(Redirect::to(&record.long_url))
        }
        None => Err(AppError::not_found(
            "Unknown short code",
            json!({ "code": code }),
        )),
    }
}
