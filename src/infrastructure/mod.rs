//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - Backup file writing and loading for the URL store

pub mod persistence;
