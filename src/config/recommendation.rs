//! Recommendation engine settings

use serde::Deserialize;

use crate::domain::recommendation::{CategoryScale, RecommendationPolicy};

use super::error::ValidationError;

/// Settings the ranking policy is built from.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    /// Fail requests when a listing's property type has no ordinal.
    /// When false such listings are skipped and reported in the response meta.
    #[serde(default = "default_strict_category_mapping")]
    pub strict_category_mapping: bool,

    #[serde(default)]
    pub category_scale: CategoryScale,
}

impl RecommendationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.category_scale.is_strictly_increasing() {
            return Err(ValidationError::InvalidCategoryScale);
        }
        Ok(())
    }

    /// Immutable policy shared by every recommendation request.
    pub fn policy(&self) -> RecommendationPolicy {
        RecommendationPolicy::default()
            .with_category_scale(self.category_scale)
            .with_strict_category_mapping(self.strict_category_mapping)
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            strict_category_mapping: default_strict_category_mapping(),
            category_scale: CategoryScale::default(),
        }
    }
}

fn default_strict_category_mapping() -> bool {
    true
}
