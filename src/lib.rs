//! # hashly
//!
//! A hash-based URL shortener: identifiers are the base62 encoding of a
//! truncated SHA-256 digest, with digest collisions resolved through
//! per-record collision chains. The store is in memory and persists
//! through a line-oriented backup file.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Records, the in-memory store, and the
//!   fingerprint trait
//! - **Application Layer** ([`application`]) - Collision-resolving
//!   identifier assignment
//! - **Infrastructure Layer** ([`infrastructure`]) - Backup file writing
//!   and loading
//! - **API Layer** ([`api`]) - Axum handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Deterministic identifiers: resubmitting a URL returns its existing code
//! - Bounded collision rehashing with chained alternate identifiers
//! - Periodic store clear with an on-demand backup trigger on a separate
//!   maintenance port
//! - Backup written on graceful shutdown
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional overrides
//! export LISTEN="0.0.0.0:3000"
//! export MAINTENANCE_LISTEN="0.0.0.0:3001"
//! export STORE_PATH="url_store.db"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]. See the
//! [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::shortener::compute_id;
    pub use crate::domain::{Fingerprint, Sha256Fingerprint, UrlRecord, UrlStore};
    pub use crate::error::{AppError, ShortenError, StoreError};
    pub use crate::state::AppState;
}
