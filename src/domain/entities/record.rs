//! Record entity representing one shortened URL mapping.

/// A stored URL record: the assigned identifier, the normalized long URL,
/// and the identifiers of other URLs that collided with this record's
/// digest prefix.
///
/// Only the first record created for a given digest prefix (the origin)
/// accumulates entries in `collision_chain`; a record reached through a
/// chain keeps an empty chain of its own. Records are never deleted
/// individually, only by a full-store clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: String,
    pub long_url: String,
    pub collision_chain: Vec<String>,
}

impl UrlRecord {
    /// Creates a new record with an empty collision chain.
    pub fn new(id: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            long_url: long_url.into(),
            collision_chain: Vec::new(),
        }
    }

    /// Returns true if other identifiers have collided with this record's
    /// digest prefix.
    pub fn has_collisions(&self) -> bool {
        !self.collision_chain.is_empty()
    }
}
