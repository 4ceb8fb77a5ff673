//! Application layer orchestrating domain logic.
//!
//! - [`shortener`] - Collision-resolving identifier assignment

pub mod shortener;

pub use shortener::compute_id;
