//! Pairwise judgments: raw submissions and their canonical stored form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ComparisonId, CriterionId, ProfileId, Timestamp};

/// Lower bound of the Saaty judgment scale.
pub const SAATY_MIN: f64 = 1.0 / 9.0;

/// Upper bound of the Saaty judgment scale.
pub const SAATY_MAX: f64 = 9.0;

/// Returns true when `value` is a usable Saaty-scale ratio.
pub fn is_saaty_value(value: f64) -> bool {
    value.is_finite() && value > 0.0 && (SAATY_MIN..=SAATY_MAX).contains(&value)
}

/// A judgment as submitted by the user: how much more `a` matters than `b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseJudgment {
    pub criterion_a_key: String,
    pub criterion_b_key: String,
    pub value: f64,
}

impl PairwiseJudgment {
    pub fn new(a: impl Into<String>, b: impl Into<String>, value: f64) -> Self {
        Self {
            criterion_a_key: a.into(),
            criterion_b_key: b.into(),
            value,
        }
    }
}

/// A judgment oriented so that `criterion_a` has the smaller stable id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanonicalComparison {
    criterion_a: CriterionId,
    criterion_b: CriterionId,
    value: f64,
}

impl CanonicalComparison {
    /// Orients a judgment of `first` over `second`.
    ///
    /// When `first` has the larger id the pair is swapped and the value
    /// inverted. Already-canonical input is returned unchanged.
    pub fn orient(first: CriterionId, second: CriterionId, value: f64) -> Self {
        if first > second {
            Self {
                criterion_a: second,
                criterion_b: first,
                value: 1.0 / value,
            }
        } else {
            Self {
                criterion_a: first,
                criterion_b: second,
                value,
            }
        }
    }

    pub fn criterion_a(&self) -> CriterionId {
        self.criterion_a
    }

    pub fn criterion_b(&self) -> CriterionId {
        self.criterion_b
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Ordered id pair used as the uniqueness key.
    pub fn ids(&self) -> (CriterionId, CriterionId) {
        (self.criterion_a, self.criterion_b)
    }
}

/// A canonical comparison as persisted for a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredComparison {
    pub id: ComparisonId,
    pub profile_id: ProfileId,
    pub comparison: CanonicalComparison,
    pub created_at: Timestamp,
}

impl StoredComparison {
    pub fn new(profile_id: ProfileId, comparison: CanonicalComparison) -> Self {
        Self {
            id: ComparisonId::new(),
            profile_id,
            comparison,
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saaty_bounds_are_inclusive() {
        assert!(is_saaty_value(1.0 / 9.0));
        assert!(is_saaty_value(9.0));
        assert!(is_saaty_value(1.0));
    }

    #[test]
    fn values_outside_saaty_scale_are_rejected() {
        assert!(!is_saaty_value(0.0));
        assert!(!is_saaty_value(-2.0));
        assert!(!is_saaty_value(9.5));
        assert!(!is_saaty_value(0.1));
        assert!(!is_saaty_value(f64::NAN));
        assert!(!is_saaty_value(f64::INFINITY));
    }

    #[test]
    fn orient_keeps_ascending_pairs() {
        let c = CanonicalComparison::orient(CriterionId::new(1), CriterionId::new(3), 5.0);
        assert_eq!(c.ids(), (CriterionId::new(1), CriterionId::new(3)));
        assert_eq!(c.value(), 5.0);
    }

    #[test]
    fn orient_swaps_and_inverts_descending_pairs() {
        let c = CanonicalComparison::orient(CriterionId::new(4), CriterionId::new(2), 4.0);
        assert_eq!(c.criterion_a(), CriterionId::new(2));
        assert_eq!(c.criterion_b(), CriterionId::new(4));
        assert_eq!(c.value(), 0.25);
    }

    #[test]
    fn orient_is_idempotent_on_canonical_input() {
        let once = CanonicalComparison::orient(CriterionId::new(2), CriterionId::new(1), 3.0);
        let twice = CanonicalComparison::orient(once.criterion_a(), once.criterion_b(), once.value());
        assert_eq!(once, twice);
    }
}
