//! Handler for the URL shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::shortener::compute_id;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_norm::normalize_url;

/// Assigns a short identifier to a submitted URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Flow
///
/// 1. Validate and normalize the submitted URL
/// 2. Assign an identifier under the store write lock
/// 3. Join the short URL from the request `Host` header
///
/// Resubmitting a known URL returns its existing identifier.
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL, 500 if identifier
/// assignment fails internally.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let long_url = normalize_url(&payload.url)?;

    let code = {
        let mut store = state.store.write().await;
        compute_id(
            &long_url,
            &mut store,
            state.fingerprint.as_ref(),
            state.max_rehash_attempts,
        )?
    };

    let short_url = join_short_url(&headers, &code);

    Ok(Json(ShortenResponse {
        code,
        long_url,
        short_url,
    }))
}

/// Joins the short URL from the request `Host` header, falling back to a
/// bare path when the header is absent.
fn join_short_url(headers: &HeaderMap, code: &str) -> String {
    match headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
        Some(host) => format!("{host}/{code}"),
        None => format!("/{code}"),
    }
}
