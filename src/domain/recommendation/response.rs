//! Explainable recommendation response.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CandidateProperty, CandidateRef};

/// Ranked items plus metadata describing how they were ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub items: Vec<RankedRecommendation>,
    pub meta: RecommendationMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecommendation {
    pub candidate_ref: CandidateRef,
    pub property: PropertySummary,
    /// TOPSIS closeness coefficient in `[0, 1]`.
    pub score: f64,
    pub explain: Explanation,
}

/// Short display form of a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySummary {
    pub title: String,
    pub address: Option<String>,
    pub property_type: String,
    pub area_code: Option<String>,
}

impl From<&CandidateProperty> for PropertySummary {
    fn from(candidate: &CandidateProperty) -> Self {
        Self {
            title: candidate.title.clone(),
            address: candidate.address.clone(),
            property_type: candidate.property_type.clone(),
            area_code: candidate.area_code.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub ahp: AhpExplanation,
    pub topsis: TopsisExplanation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpExplanation {
    /// Priority weight per criterion key.
    pub weights: BTreeMap<String, f64>,
    pub cr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisExplanation {
    pub d_best: f64,
    pub d_worst: f64,
    /// Numeric value fed to the ranker per criterion key.
    pub criteria_values: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMeta {
    pub criteria_order: Vec<String>,
    pub is_benefit: Vec<bool>,
    pub cr_threshold: f64,
    /// Eligible candidates seen, before category filtering.
    pub candidates_total: usize,
    pub ranked_count: usize,
    pub missing_score_count: usize,
    /// Labels excluded for lacking a category mapping (lenient mode only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_categories: Vec<String>,
}
