//! HTTP request handlers.
//!
//! Each handler module corresponds to one endpoint.

pub mod backup;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use backup::backup_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
