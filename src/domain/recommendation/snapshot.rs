//! Everything one recommendation computation reads, captured at one instant.

use crate::domain::preference::{CanonicalComparison, Criterion, PreferenceProfile};

use super::{Area, CandidateProperty};

/// Consistent read of a user's preferences and the eligible catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationSnapshot {
    pub profile: Option<PreferenceProfile>,
    pub comparisons: Vec<CanonicalComparison>,
    /// All configured criteria, active or not.
    pub criteria: Vec<Criterion>,
    /// Eligible candidates only.
    pub candidates: Vec<CandidateProperty>,
    pub areas: Vec<Area>,
}
