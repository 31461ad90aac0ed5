//! Failures of the numeric analysis core (AHP and TOPSIS).

use thiserror::Error;

use crate::domain::foundation::{CriterionId, ErrorCode};

/// Why a weighting or ranking computation could not produce a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("At least 2 criteria are required, got {count}")]
    InsufficientCriteria { count: usize },

    #[error("No random index is defined for a {size}x{size} comparison matrix")]
    UnsupportedMatrixSize { size: usize },

    #[error("Comparison references criterion {id} outside the active set")]
    UnknownCriterion { id: CriterionId },

    #[error("Degenerate comparison matrix: {reason}")]
    DegenerateMatrix { reason: String },

    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Pairwise judgments are inconsistent (CR {consistency_ratio:.4} >= {threshold})")]
    InconsistentJudgments {
        consistency_ratio: f64,
        threshold: f64,
    },
}

impl AnalysisError {
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateMatrix {
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedMatrixSize { .. } => ErrorCode::ConfigurationError,
            Self::InconsistentJudgments { .. } => ErrorCode::InconsistentJudgments,
            Self::InsufficientCriteria { .. }
            | Self::UnknownCriterion { .. }
            | Self::DegenerateMatrix { .. }
            | Self::DimensionMismatch { .. } => ErrorCode::DegenerateInput,
        }
    }
}
