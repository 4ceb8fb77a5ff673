//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A shortened URL mapping with its collision chain

pub mod record;

pub use record::UrlRecord;
