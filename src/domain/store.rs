//! In-memory URL store.
//!
//! Maps identifiers to [`UrlRecord`]s and tracks repeat-submission counts.
//! The store itself is not thread-safe; callers share it behind
//! `Arc<tokio::sync::RwLock<UrlStore>>` (see [`crate::state`]) so that an
//! assignment's full read-modify-write sequence runs under one write lock.

use std::collections::HashMap;

use crate::domain::entities::UrlRecord;

/// In-memory mapping from identifier to record.
///
/// Visit counts are observational only: they are never persisted and are
/// dropped together with the records on [`UrlStore::clear`].
#[derive(Debug, Default, Clone)]
pub struct UrlStore {
    records: HashMap<String, UrlRecord>,
    visits: HashMap<String, u64>,
}

impl UrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&UrlRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Inserts a record keyed by its own identifier.
    pub fn insert(&mut self, record: UrlRecord) {
        self.records.insert(record.id.clone(), record);
    }

    /// Appends `chained_id` to the collision chain of the origin record.
    ///
    /// A missing origin would break chain referential integrity; the
    /// assigner only calls this with an identifier it just looked up.
    pub fn append_collision(&mut self, origin_id: &str, chained_id: &str) {
        if let Some(origin) = self.records.get_mut(origin_id) {
            origin.collision_chain.push(chained_id.to_string());
        } else {
            tracing::warn!(origin_id, chained_id, "collision origin missing from store");
        }
    }

    /// Increments the repeat-submission count for `id` and returns the
    /// new value.
    pub fn record_visit(&mut self, id: &str) -> u64 {
        let count = self.visits.entry(id.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn visit_count(&self, id: &str) -> u64 {
        self.visits.get(id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates all records in unspecified order.
    pub fn records(&self) -> impl Iterator<Item = &UrlRecord> {
        self.records.values()
    }

    /// Empties the store in place, dropping records and visit counts.
    pub fn clear(&mut self) {
        self.records.clear();
        self.visits.clear();
    }
}
