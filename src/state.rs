//! Shared application state.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::fingerprint::{Fingerprint, Sha256Fingerprint};
use crate::domain::store::UrlStore;

/// The store shared across handlers and the periodic clear task.
///
/// An assignment holds the write lock for its whole read-modify-write
/// sequence; redirects hold the read lock; the clear task takes the write
/// lock, so an in-flight assignment and a clear serialize on the lock.
pub type SharedStore = Arc<RwLock<UrlStore>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub fingerprint: Arc<dyn Fingerprint>,
    pub store_path: PathBuf,
    pub max_rehash_attempts: u32,
}

impl AppState {
    pub fn new(store: UrlStore, store_path: PathBuf, max_rehash_attempts: u32) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            fingerprint: Arc::new(Sha256Fingerprint),
            store_path,
            max_rehash_attempts,
        }
    }

    /// Replaces the fingerprint implementation. Test hook for forcing
    /// digest collisions.
    pub fn with_fingerprint(mut self, fingerprint: Arc<dyn Fingerprint>) -> Self {
        self.fingerprint = fingerprint;
        self
    }
}
