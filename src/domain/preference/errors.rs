//! Rejections raised while validating a pairwise comparison batch.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::CriterionPair;

/// Why a submitted batch of pairwise judgments was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComparisonValidationError {
    #[error("Unknown criterion key: {key}")]
    UnknownCriterion { key: String },

    #[error("Self-comparisons are not allowed (criterion '{key}')")]
    SelfComparison { key: String },

    #[error(
        "Pairwise value {value} for '{criterion_a_key}' over '{criterion_b_key}' \
         must be within the Saaty range [1/9, 9]"
    )]
    OutOfRangeValue {
        criterion_a_key: String,
        criterion_b_key: String,
        value: f64,
    },

    #[error(
        "Pairwise comparisons must cover all criterion pairs exactly once \
         (expected {expected_pair_count}, provided {provided_pair_count})"
    )]
    IncompletePairs {
        expected_pair_count: usize,
        provided_pair_count: usize,
        missing_pairs: Vec<CriterionPair>,
        extra_pairs: Vec<CriterionPair>,
    },

    #[error("Duplicate pairwise comparison for {pair}")]
    DuplicateComparison { pair: CriterionPair },
}

impl ComparisonValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownCriterion { .. } => ErrorCode::UnknownCriterion,
            Self::SelfComparison { .. } => ErrorCode::SelfComparison,
            Self::OutOfRangeValue { .. } => ErrorCode::OutOfRangeValue,
            Self::IncompletePairs { .. } => ErrorCode::IncompletePairs,
            Self::DuplicateComparison { .. } => ErrorCode::DuplicateComparison,
        }
    }
}

/// Failures of the preference profile and comparison use cases.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreferenceError {
    #[error("Preference profile not found. Create it via PUT /preference-profiles/me")]
    ProfileNotFound,

    #[error("At least 2 active criteria are required to submit comparisons, found {count}")]
    NotEnoughCriteria { count: usize },

    #[error(transparent)]
    InvalidProfile(#[from] ValidationError),

    #[error(transparent)]
    InvalidComparisons(#[from] ComparisonValidationError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl PreferenceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ProfileNotFound => ErrorCode::ProfileNotFound,
            Self::NotEnoughCriteria { .. } => ErrorCode::NotEnoughCriteria,
            Self::InvalidProfile(_) => ErrorCode::ValidationFailed,
            Self::InvalidComparisons(err) => err.code(),
            Self::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for PreferenceError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ProfileNotFound => Self::ProfileNotFound,
            _ => Self::Infrastructure(err.to_string()),
        }
    }
}
