//! HTTP DTOs for recommendation endpoints.
//!
//! The domain [`Recommendations`] already has the wire shape, so the
//! response is re-exported rather than mirrored.

pub use crate::domain::recommendation::Recommendations as RecommendationsResponse;
