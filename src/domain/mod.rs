//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, errors)
//! - `preference` - Criteria, preference profiles and pairwise judgments
//! - `analysis` - Pure numeric services (AHP weights, TOPSIS ranking)
//! - `recommendation` - Decision matrix and the recommendation pipeline

pub mod analysis;
pub mod foundation;
pub mod preference;
pub mod recommendation;
