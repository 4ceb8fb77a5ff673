//! Durable persistence for the in-memory store.
//!
//! - [`backup`] - Line-oriented backup file writing and loading

pub mod backup;

pub use backup::{backup, load};
