//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`store`] - In-memory identifier-to-record mapping with visit counts
//! - [`fingerprint`] - URL digest trait and its SHA-256 implementation
//!
//! The domain layer has no dependency on the HTTP or persistence layers;
//! identifier assignment itself lives in
//! [`crate::application::shortener`].

pub mod entities;
pub mod fingerprint;
pub mod store;

pub use entities::UrlRecord;
pub use fingerprint::{Fingerprint, Sha256Fingerprint};
pub use store::UrlStore;
