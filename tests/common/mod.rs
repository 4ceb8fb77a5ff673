#![allow(dead_code)]

use std::sync::Arc;

use hashly::domain::fingerprint::Fingerprint;
use hashly::domain::store::UrlStore;
use hashly::state::AppState;
use tempfile::TempDir;

/// Builds a state backed by a temp-dir store path. The `TempDir` must be
/// kept alive for the duration of the test.
pub fn create_test_state() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("url_store.db");
    let state = AppState::new(UrlStore::new(), path, 16);
    (state, dir)
}

/// Forces two distinct URLs onto the same identifier slot: marker-free
/// inputs share one digest, rehash inputs share another.
pub struct CollidingFingerprint;

impl Fingerprint for CollidingFingerprint {
    fn digest(&self, url: &str) -> String {
        if url.contains("###") {
            "1234567890abcdef".to_string()
        } else {
            "112233abcdef0000".to_string()
        }
    }
}

pub fn colliding_fingerprint() -> Arc<dyn Fingerprint> {
    Arc::new(CollidingFingerprint)
}
