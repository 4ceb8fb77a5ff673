//! Identifier assignment with collision-chain resolution.
//!
//! A URL's identifier is the base62 encoding of the first 8 hex characters
//! of its fingerprint. Truncating the digest reintroduces a collision
//! space: two distinct URLs can land on the same identifier. Collisions are
//! resolved by perturbing the fingerprint input with a marker plus a
//! nanosecond timestamp and rehashing, and the origin record keeps a chain
//! of the alternate identifiers handed out this way so that resubmitting a
//! collided URL finds its existing identifier instead of rehashing again.

use chrono::{SecondsFormat, Utc};

use crate::domain::entities::UrlRecord;
use crate::domain::fingerprint::Fingerprint;
use crate::domain::store::UrlStore;
use crate::error::ShortenError;
use crate::utils::base62;

/// Appended to a URL purely to perturb its fingerprint on a rehash
/// attempt. Stripped before anything is stored or returned.
const COLLISION_MARKER: &str = "###hashly###";

/// Digest characters fed to the identifier encoder.
const DIGEST_PREFIX_LEN: usize = 8;

/// Repeat submissions past this count are logged.
const REPEAT_LOG_THRESHOLD: u64 = 3;

/// Parses the digest prefix as hex and encodes it in base62.
fn encode_prefix(digest: &str) -> Result<String, ShortenError> {
    let prefix = digest
        .get(..DIGEST_PREFIX_LEN)
        .ok_or_else(|| ShortenError::DigestParse {
            prefix: digest.to_string(),
        })?;
    let value = u64::from_str_radix(prefix, 16).map_err(|_| ShortenError::DigestParse {
        prefix: prefix.to_string(),
    })?;
    Ok(base62::encode(value))
}

/// Assigns a stable short identifier to `url`, resolving digest collisions.
///
/// `url` must already be normalized; the record stored for it is always the
/// marker-free form. The whole call must run under one write lock on the
/// shared store so the read-modify-write sequence observes a consistent
/// map.
///
/// # Errors
///
/// - [`ShortenError::DigestParse`] if the fingerprint yields a prefix that
///   is not valid hex (internal invariant violation).
/// - [`ShortenError::CollisionExhausted`] if `max_attempts` rehashes all
///   land on identifiers owned by other URLs.
pub fn compute_id(
    url: &str,
    store: &mut UrlStore,
    fingerprint: &dyn Fingerprint,
    max_attempts: u32,
) -> Result<String, ShortenError> {
    let mut input = url.to_string();
    let mut origin_id: Option<String> = None;

    for attempt in 1..=max_attempts {
        let digest = fingerprint.digest(&input);
        let candidate = encode_prefix(&digest)?;
        let origin = origin_id.get_or_insert_with(|| candidate.clone()).clone();

        let occupied = store.get(&candidate).map(|r| r.long_url == url);
        match occupied {
            // Free slot: this URL is new here. A rehashed candidate is
            // chained onto the origin record first.
            None => {
                if candidate != origin {
                    store.append_collision(&origin, &candidate);
                    tracing::debug!(
                        id = %candidate,
                        origin = %origin,
                        attempt,
                        "collision resolved via rehash"
                    );
                }
                store.insert(UrlRecord::new(candidate.clone(), url));
                return Ok(candidate);
            }
            // Repeat submission of an already-known URL.
            Some(true) => {
                let visits = store.record_visit(&candidate);
                if visits > REPEAT_LOG_THRESHOLD {
                    tracing::info!(id = %candidate, visits, "url resubmitted repeatedly");
                }
                return Ok(candidate);
            }
            // A different URL owns this identifier. A previous collision may
            // already have assigned this URL a chained identifier.
            Some(false) => {
                if let Some(chained) = store
                    .get(&candidate)
                    .into_iter()
                    .flat_map(|r| r.collision_chain.iter())
                    .find(|id| store.get(id.as_str()).is_some_and(|r| r.long_url == url))
                {
                    return Ok(chained.clone());
                }

                // New collision: perturb the fingerprint input and retry,
                // keeping the origin identifier across attempts.
                input = format!(
                    "{url}{COLLISION_MARKER}{}",
                    Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true)
                );
            }
        }
    }

    Err(ShortenError::CollisionExhausted {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fingerprint::Sha256Fingerprint;

    const MAX_ATTEMPTS: u32 = 16;

    /// Forces two URLs onto the same identifier: every marker-free input
    /// digests to one constant, every rehash input to another.
    struct CollidingFingerprint;

    impl Fingerprint for CollidingFingerprint {
        fn digest(&self, url: &str) -> String {
            if url.contains(COLLISION_MARKER) {
                "1234567890abcdef".to_string()
            } else {
                "112233abcdef0000".to_string()
            }
        }
    }

    /// Digests everything to the same constant, so rehashing never escapes
    /// the occupied slot.
    struct ConstantFingerprint;

    impl Fingerprint for ConstantFingerprint {
        fn digest(&self, _url: &str) -> String {
            "112233abcdef0000".to_string()
        }
    }

    struct BrokenFingerprint;

    impl Fingerprint for BrokenFingerprint {
        fn digest(&self, _url: &str) -> String {
            "zz".to_string()
        }
    }

    #[test]
    fn test_known_url_gets_known_identifier() {
        let mut store = UrlStore::new();
        let id = compute_id(
            "https://marketplace.visualstudio.com/items?itemName=humao.rest-client",
            &mut store,
            &Sha256Fingerprint,
            MAX_ATTEMPTS,
        )
        .unwrap();

        assert_eq!(id, "3YLBCD");
        assert!(store.contains("3YLBCD"));
    }

    #[test]
    fn test_assignment_is_deterministic() {
        let mut store = UrlStore::new();
        let first = compute_id(
            "https://example.com/a",
            &mut store,
            &Sha256Fingerprint,
            MAX_ATTEMPTS,
        )
        .unwrap();
        let second = compute_id(
            "https://example.com/a",
            &mut store,
            &Sha256Fingerprint,
            MAX_ATTEMPTS,
        )
        .unwrap();

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_distinct_urls_get_distinct_identifiers() {
        let mut store = UrlStore::new();
        let a = compute_id(
            "https://example.com/a",
            &mut store,
            &Sha256Fingerprint,
            MAX_ATTEMPTS,
        )
        .unwrap();
        let b = compute_id(
            "https://example.com/b",
            &mut store,
            &Sha256Fingerprint,
            MAX_ATTEMPTS,
        )
        .unwrap();

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_repeat_submission_bumps_visit_count() {
        let mut store = UrlStore::new();
        let id = compute_id(
            "https://example.com/a",
            &mut store,
            &Sha256Fingerprint,
            MAX_ATTEMPTS,
        )
        .unwrap();
        assert_eq!(store.visit_count(&id), 0);

        compute_id(
            "https://example.com/a",
            &mut store,
            &Sha256Fingerprint,
            MAX_ATTEMPTS,
        )
        .unwrap();

        assert_eq!(store.visit_count(&id), 1);
        assert!(store.get(&id).unwrap().collision_chain.is_empty());
    }

    #[test]
    fn test_collision_assigns_distinct_chained_identifier() {
        let mut store = UrlStore::new();
        let fp = CollidingFingerprint;

        let a = compute_id("https://example.com/a", &mut store, &fp, MAX_ATTEMPTS).unwrap();
        let b = compute_id("https://example.com/b", &mut store, &fp, MAX_ATTEMPTS).unwrap();

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&a).unwrap().collision_chain, vec![b.clone()]);
        assert!(store.get(&b).unwrap().collision_chain.is_empty());

        // Stored URLs never carry the rehash marker.
        assert_eq!(store.get(&b).unwrap().long_url, "https://example.com/b");
    }

    #[test]
    fn test_resubmitting_collided_urls_is_stable() {
        let mut store = UrlStore::new();
        let fp = CollidingFingerprint;

        let a = compute_id("https://example.com/a", &mut store, &fp, MAX_ATTEMPTS).unwrap();
        let b = compute_id("https://example.com/b", &mut store, &fp, MAX_ATTEMPTS).unwrap();

        // Both URLs resolve to their existing identifiers, not fresh ones.
        assert_eq!(
            compute_id("https://example.com/a", &mut store, &fp, MAX_ATTEMPTS).unwrap(),
            a
        );
        assert_eq!(
            compute_id("https://example.com/b", &mut store, &fp, MAX_ATTEMPTS).unwrap(),
            b
        );
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&a).unwrap().collision_chain.len(), 1);
    }

    #[test]
    fn test_rehash_exhaustion_errors_out() {
        let mut store = UrlStore::new();
        let fp = ConstantFingerprint;

        compute_id("https://example.com/a", &mut store, &fp, 4).unwrap();
        let err = compute_id("https://example.com/b", &mut store, &fp, 4).unwrap_err();

        assert!(matches!(
            err,
            ShortenError::CollisionExhausted { attempts: 4 }
        ));
        // The losing URL was never stored.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_malformed_digest_is_a_parse_error() {
        let mut store = UrlStore::new();
        let err = compute_id(
            "https://example.com/a",
            &mut store,
            &BrokenFingerprint,
            MAX_ATTEMPTS,
        )
        .unwrap_err();

        assert!(matches!(err, ShortenError::DigestParse { .. }));
    }
}
