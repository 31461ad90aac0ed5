//! Immutable settings a recommendation computation runs under.

use crate::domain::analysis::ConsistencyPolicy;
use crate::domain::preference::CriterionKey;

use super::CategoryScale;

/// Locked criteria order: columns of the decision matrix and AHP rows.
pub const CRITERIA_ORDER: [&str; 4] = ["price", "size", "property_type", "area_score"];

/// Settings built once at start-up and shared by every request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationPolicy {
    criteria_order: Vec<CriterionKey>,
    consistency: ConsistencyPolicy,
    category_scale: CategoryScale,
    strict_category_mapping: bool,
}

impl RecommendationPolicy {
    pub fn new(
        criteria_order: Vec<CriterionKey>,
        consistency: ConsistencyPolicy,
        category_scale: CategoryScale,
        strict_category_mapping: bool,
    ) -> Self {
        Self {
            criteria_order,
            consistency,
            category_scale,
            strict_category_mapping,
        }
    }

    pub fn with_category_scale(mut self, scale: CategoryScale) -> Self {
        self.category_scale = scale;
        self
    }

    pub fn with_strict_category_mapping(mut self, strict: bool) -> Self {
        self.strict_category_mapping = strict;
        self
    }

    pub fn criteria_order(&self) -> &[CriterionKey] {
        &self.criteria_order
    }

    pub fn consistency(&self) -> &ConsistencyPolicy {
        &self.consistency
    }

    pub fn category_scale(&self) -> &CategoryScale {
        &self.category_scale
    }

    pub fn strict_category_mapping(&self) -> bool {
        self.strict_category_mapping
    }
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self::new(
            CRITERIA_ORDER
                .iter()
                .filter_map(|k| CriterionKey::new(*k).ok())
                .collect(),
            ConsistencyPolicy::default(),
            CategoryScale::default(),
            true,
        )
    }
}
