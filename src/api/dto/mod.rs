//! Data Transfer Objects for request/response serialization.

pub mod shorten;

pub use shorten::{ShortenRequest, ShortenResponse};
