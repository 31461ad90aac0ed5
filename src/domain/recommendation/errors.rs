//! Failures of a recommendation request.

use thiserror::Error;

use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::preference::CriterionKey;

/// Why recommendations could not be produced for a user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendationError {
    #[error("Preference profile not found. Create it via PUT /preference-profiles/me")]
    ProfileNotFound,

    #[error(
        "Pairwise comparisons not set. Submit them via POST \
         /preference-profiles/me/pairwise-comparisons"
    )]
    ComparisonsNotSet,

    #[error("Missing required criteria: {}", join_keys(.missing))]
    MissingCriteriaConfiguration { missing: Vec<CriterionKey> },

    #[error("Pairwise judgments are inconsistent (CR {cr:.4} >= {threshold}); please revise them")]
    InconsistentJudgments { cr: f64, threshold: f64 },

    #[error("No category mapping for property types: {}", .categories.join(", "))]
    UnknownCategory { categories: Vec<String> },

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl RecommendationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ProfileNotFound => ErrorCode::ProfileNotFound,
            Self::ComparisonsNotSet => ErrorCode::ComparisonsNotSet,
            Self::MissingCriteriaConfiguration { .. } | Self::Configuration(_) => {
                ErrorCode::ConfigurationError
            }
            Self::InconsistentJudgments { .. } => ErrorCode::InconsistentJudgments,
            Self::UnknownCategory { .. } => ErrorCode::UnknownCategory,
            Self::DegenerateInput(_) => ErrorCode::DegenerateInput,
            Self::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

fn join_keys(keys: &[CriterionKey]) -> String {
    keys.iter()
        .map(CriterionKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<AnalysisError> for RecommendationError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::InconsistentJudgments {
                consistency_ratio,
                threshold,
            } => Self::InconsistentJudgments {
                cr: consistency_ratio,
                threshold,
            },
            AnalysisError::UnsupportedMatrixSize { .. } => Self::Configuration(err.to_string()),
            other => Self::DegenerateInput(other.to_string()),
        }
    }
}

impl From<DomainError> for RecommendationError {
    fn from(err: DomainError) -> Self {
        Self::Infrastructure(err.to_string())
    }
}
