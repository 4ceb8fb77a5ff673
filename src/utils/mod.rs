//! Utility functions for identifier encoding and URL processing.
//!
//! - [`base62`] - Base62 encoding of digest prefix values
//! - [`url_norm`] - URL normalization applied before assignment

pub mod base62;
pub mod url_norm;
