//! HTTP middleware for axum.
//!
//! - `identity` - Caller identity extractor

pub mod identity;

pub use identity::{CallerIdentity, USER_ID_HEADER};
