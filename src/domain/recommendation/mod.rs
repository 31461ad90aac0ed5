//! Recommendation domain - from stored judgments to ranked rental properties.
//!
//! [`RecommendationOrchestrator`] is the entry point. It reads a
//! [`RecommendationSnapshot`], derives AHP weights, gates on consistency,
//! builds the decision matrix and ranks candidates with TOPSIS.

mod area;
mod candidate;
mod decision_matrix;
mod errors;
mod orchestrator;
mod policy;
mod property_type;
mod response;
mod snapshot;

pub use area::{Area, AreaScoreDictionary, NEUTRAL_AREA_SCORE};
pub use candidate::{CandidateProperty, CandidateRef};
pub use decision_matrix::{
    CriterionAttribute, DecisionMatrix, DecisionMatrixBuilder, MatrixRow, EMPTY_CATEGORY_LABEL,
};
pub use errors::RecommendationError;
pub use orchestrator::RecommendationOrchestrator;
pub use policy::{RecommendationPolicy, CRITERIA_ORDER};
pub use property_type::{CategoryScale, PropertyType};
pub use response::{
    AhpExplanation, Explanation, PropertySummary, RankedRecommendation, RecommendationMeta,
    Recommendations, TopsisExplanation,
};
pub use snapshot::RecommendationSnapshot;
