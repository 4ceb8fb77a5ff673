//! DTOs for the URL shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response carrying the assigned identifier.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// The short identifier.
    pub code: String,
    /// The normalized URL the identifier resolves to.
    pub long_url: String,
    /// Full short URL joined from the request host.
    pub short_url: String,
}
