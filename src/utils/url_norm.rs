//! Light URL normalization applied before identifier assignment.
//!
//! The assigner fingerprints the normalized string, so trivially different
//! spellings of the same URL (host case, default port, fragment) must
//! collapse to one form before hashing.

use serde_json::json;
use url::Url;

use crate::error::AppError;

/// Normalizes a submitted URL: lowercases the host, drops the fragment and
/// any default port.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the input does not parse or uses a
/// scheme other than http/https.
pub fn normalize_url(input: &str) -> Result<String, AppError> {
    let mut url = Url::parse(input)
        .map_err(|e| AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() })))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::bad_request(
            "Only http/https URLs are allowed",
            json!({ "scheme": url.scheme() }),
        ));
    }

    if let Some(host) = url.host_str() {
        let host = host.to_ascii_lowercase();
        if url.set_host(Some(&host)).is_err() {
            return Err(AppError::bad_request(
                "Invalid URL host",
                json!({ "host": host }),
            ));
        }
    }

    url.set_fragment(None);

    let default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if default_port {
        // set_port only fails for schemes without ports; http/https have them
        let _ = url.set_port(None);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_host() {
        assert_eq!(
            normalize_url("https://Example.COM/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_drops_fragment_and_default_port() {
        assert_eq!(
            normalize_url("https://example.com:443/page#section").unwrap(),
            "https://example.com/page"
        );
        assert_eq!(
            normalize_url("http://example.com:80/").unwrap(),
            "http://example.com/"
        );
    }

    #[test]
    fn test_keeps_explicit_port_and_query() {
        assert_eq!(
            normalize_url("https://example.com:8443/a?b=c").unwrap(),
            "https://example.com:8443/a?b=c"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        assert!(normalize_url("ftp://example.com/file").is_err());
    }

    #[test]
    fn test_rejects_unparseable_input() {
        assert!(normalize_url("not a url").is_err());
    }
}
