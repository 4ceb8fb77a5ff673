//! URL fingerprinting.
//!
//! The fingerprint feeds the identifier encoder: its first 8 hex characters
//! become the base62 short code, so the digest must be deterministic and
//! collision-resistant. The trait is the seam used by tests to force digest
//! collisions without engineering real SHA-256 prefix collisions.

use sha2::{Digest, Sha256};

/// Deterministic hex digest of a normalized URL.
///
/// Implementations must be pure: the assigner calls this repeatedly while
/// resolving collisions, and equal inputs must always yield equal output.
pub trait Fingerprint: Send + Sync {
    fn digest(&self, url: &str) -> String;
}

/// SHA-256 fingerprint, the production implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Fingerprint;

impl Fingerprint for Sha256Fingerprint {
    fn digest(&self, url: &str) -> String {
        hex::encode(Sha256::digest(url.as_bytes()))
    }
}
