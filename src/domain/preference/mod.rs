//! Preference domain - criteria, user profiles and pairwise judgments.
//!
//! A user expresses preferences by comparing every pair of active criteria
//! on the Saaty scale. The [`PairwiseComparisonValidator`] turns a submitted
//! batch into canonical comparisons ready for storage.

mod comparison;
pub(crate) mod criterion;
mod errors;
mod profile;
mod validator;
mod view;

pub use comparison::{
    is_saaty_value, CanonicalComparison, PairwiseJudgment, StoredComparison, SAATY_MAX, SAATY_MIN,
};
pub use criterion::{CriteriaSet, Criterion, CriterionKey, CriterionPair, MAX_CRITERION_KEY_LEN};
pub use errors::{ComparisonValidationError, PreferenceError};
pub use profile::{PreferenceProfile, DEFAULT_PROFILE_NAME, MAX_PROFILE_NAME_LEN};
pub use validator::PairwiseComparisonValidator;
pub use view::{ComparisonView, CriterionRef};
