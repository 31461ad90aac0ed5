//! PairwiseComparisonValidator - Validates and canonicalizes a judgment batch.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::CriterionId;

use super::{
    is_saaty_value, CanonicalComparison, ComparisonValidationError, CriteriaSet, Criterion,
    CriterionPair, PairwiseJudgment,
};

/// Validation of user-submitted pairwise judgments.
pub struct PairwiseComparisonValidator;

impl PairwiseComparisonValidator {
    /// Validates a complete batch against the active criteria and returns it
    /// in canonical form, sorted by `(criterion_a, criterion_b)`.
    ///
    /// # Checks, in order
    /// 1. Per judgment: known keys, distinct keys, Saaty-range value.
    /// 2. The unordered pairs cover every pair of active criteria, no more.
    /// 3. No two judgments share an unordered pair after canonicalization.
    pub fn validate(
        criteria: &CriteriaSet,
        batch: &[PairwiseJudgment],
    ) -> Result<Vec<CanonicalComparison>, ComparisonValidationError> {
        let mut resolved: Vec<(&Criterion, &Criterion, f64)> = Vec::with_capacity(batch.len());

        for judgment in batch {
            let a = Self::resolve(criteria, &judgment.criterion_a_key)?;
            let b = Self::resolve(criteria, &judgment.criterion_b_key)?;

            if a.id == b.id {
                return Err(ComparisonValidationError::SelfComparison {
                    key: a.key.to_string(),
                });
            }

            if !is_saaty_value(judgment.value) {
                return Err(ComparisonValidationError::OutOfRangeValue {
                    criterion_a_key: judgment.criterion_a_key.clone(),
                    criterion_b_key: judgment.criterion_b_key.clone(),
                    value: judgment.value,
                });
            }

            resolved.push((a, b, judgment.value));
        }

        Self::check_coverage(criteria, &resolved)?;

        let mut canonical: BTreeMap<(CriterionId, CriterionId), CanonicalComparison> =
            BTreeMap::new();
        for (a, b, value) in resolved {
            let comparison = CanonicalComparison::orient(a.id, b.id, value);
            if canonical.insert(comparison.ids(), comparison).is_some() {
                return Err(ComparisonValidationError::DuplicateComparison {
                    pair: CriterionPair::new(&a.key, &b.key),
                });
            }
        }

        Ok(canonical.into_values().collect())
    }

    fn resolve<'a>(
        criteria: &'a CriteriaSet,
        key: &str,
    ) -> Result<&'a Criterion, ComparisonValidationError> {
        criteria
            .find_by_key(key)
            .ok_or_else(|| ComparisonValidationError::UnknownCriterion {
                key: key.to_string(),
            })
    }

    fn check_coverage(
        criteria: &CriteriaSet,
        resolved: &[(&Criterion, &Criterion, f64)],
    ) -> Result<(), ComparisonValidationError> {
        let expected = criteria.expected_pairs();
        let provided: BTreeSet<CriterionPair> = resolved
            .iter()
            .map(|(a, b, _)| CriterionPair::new(&a.key, &b.key))
            .collect();

        if provided == expected {
            return Ok(());
        }

        Err(ComparisonValidationError::IncompletePairs {
            expected_pair_count: expected.len(),
            provided_pair_count: provided.len(),
            missing_pairs: expected.difference(&provided).cloned().collect(),
            extra_pairs: provided.difference(&expected).cloned().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::preference::criterion::fixtures::{criterion, rental_criteria};
    use crate::domain::preference::CriterionKey;

    fn active_set() -> CriteriaSet {
        CriteriaSet::new(rental_criteria())
    }

    fn judgment(a: &str, b: &str, value: f64) -> PairwiseJudgment {
        PairwiseJudgment::new(a, b, value)
    }

    fn full_batch() -> Vec<PairwiseJudgment> {
        vec![
            judgment("price", "size", 3.0),
            judgment("price", "property_type", 5.0),
            judgment("price", "area_score", 3.0),
            judgment("size", "property_type", 2.0),
            judgment("size", "area_score", 1.0),
            judgment("property_type", "area_score", 0.5),
        ]
    }

    fn pair(a: &str, b: &str) -> CriterionPair {
        CriterionPair::new(&CriterionKey::new(a).unwrap(), &CriterionKey::new(b).unwrap())
    }

    #[test]
    fn accepts_complete_batch() {
        let canonical = PairwiseComparisonValidator::validate(&active_set(), &full_batch()).unwrap();
        assert_eq!(canonical.len(), 6);
    }

    #[test]
    fn output_is_sorted_by_criterion_ids() {
        let mut batch = full_batch();
        batch.reverse();
        let canonical = PairwiseComparisonValidator::validate(&active_set(), &batch).unwrap();
        let ids: Vec<_> = canonical.iter().map(|c| (c.criterion_a().value(), c.criterion_b().value())).collect();
        assert_eq!(ids, vec![(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]);
    }

    #[test]
    fn reversed_submission_is_inverted() {
        let mut batch = full_batch();
        batch[0] = judgment("size", "price", 4.0);
        let canonical = PairwiseComparisonValidator::validate(&active_set(), &batch).unwrap();
        let price_size = canonical
            .iter()
            .find(|c| c.ids() == (CriterionId::new(1), CriterionId::new(2)))
            .unwrap();
        assert_eq!(price_size.value(), 0.25);
    }

    #[test]
    fn canonical_order_follows_ids_not_key_names() {
        // "area_score" sorts first alphabetically but has the largest id.
        let canonical = PairwiseComparisonValidator::validate(&active_set(), &full_batch()).unwrap();
        let last = canonical.last().unwrap();
        assert_eq!(last.ids(), (CriterionId::new(3), CriterionId::new(4)));
        assert_eq!(last.value(), 0.5);
    }

    #[test]
    fn rejects_unknown_criterion() {
        let mut batch = full_batch();
        batch[2] = judgment("price", "parking", 3.0);
        let err = PairwiseComparisonValidator::validate(&active_set(), &batch).unwrap_err();
        assert_eq!(
            err,
            ComparisonValidationError::UnknownCriterion {
                key: "parking".to_string()
            }
        );
    }

    #[test]
    fn inactive_criterion_counts_as_unknown() {
        let mut criteria = rental_criteria();
        criteria.push(criterion(5, "parking", true).deactivated());
        let mut batch = full_batch();
        batch.push(judgment("price", "parking", 2.0));
        let err = PairwiseComparisonValidator::validate(&CriteriaSet::new(criteria), &batch).unwrap_err();
        assert!(matches!(err, ComparisonValidationError::UnknownCriterion { .. }));
    }

    #[test]
    fn rejects_self_comparison() {
        let mut batch = full_batch();
        batch[0] = judgment("size", "size", 1.0);
        let err = PairwiseComparisonValidator::validate(&active_set(), &batch).unwrap_err();
        assert_eq!(
            err,
            ComparisonValidationError::SelfComparison {
                key: "size".to_string()
            }
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        for bad in [0.0, -1.0, 0.1, 9.01, f64::NAN] {
            let mut batch = full_batch();
            batch[1] = judgment("price", "property_type", bad);
            let err = PairwiseComparisonValidator::validate(&active_set(), &batch).unwrap_err();
            assert!(
                matches!(err, ComparisonValidationError::OutOfRangeValue { .. }),
                "value {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn accepts_saaty_extremes() {
        let mut batch = full_batch();
        batch[0] = judgment("price", "size", 9.0);
        batch[1] = judgment("price", "property_type", 1.0 / 9.0);
        assert!(PairwiseComparisonValidator::validate(&active_set(), &batch).is_ok());
    }

    #[test]
    fn missing_pair_is_named() {
        let mut batch = full_batch();
        batch.remove(4); // size / area_score
        let err = PairwiseComparisonValidator::validate(&active_set(), &batch).unwrap_err();
        match err {
            ComparisonValidationError::IncompletePairs {
                expected_pair_count,
                provided_pair_count,
                missing_pairs,
                extra_pairs,
            } => {
                assert_eq!(expected_pair_count, 6);
                assert_eq!(provided_pair_count, 5);
                assert_eq!(missing_pairs, vec![pair("size", "area_score")]);
                assert!(extra_pairs.is_empty());
            }
            other => panic!("expected IncompletePairs, got {:?}", other),
        }
    }

    #[test]
    fn empty_batch_reports_every_pair_missing() {
        let err = PairwiseComparisonValidator::validate(&active_set(), &[]).unwrap_err();
        match err {
            ComparisonValidationError::IncompletePairs {
                provided_pair_count,
                missing_pairs,
                ..
            } => {
                assert_eq!(provided_pair_count, 0);
                assert_eq!(missing_pairs.len(), 6);
            }
            other => panic!("expected IncompletePairs, got {:?}", other),
        }
    }

    #[test]
    fn batch_for_a_wider_set_fails_on_unknown_keys() {
        let criteria = CriteriaSet::new(rental_criteria().into_iter().take(2).collect());
        let err = PairwiseComparisonValidator::validate(&criteria, &full_batch()).unwrap_err();
        assert!(matches!(err, ComparisonValidationError::UnknownCriterion { .. }));
    }

    #[test]
    fn duplicate_pair_with_different_value_is_rejected() {
        let mut batch = full_batch();
        batch.push(judgment("size", "price", 2.0));
        let err = PairwiseComparisonValidator::validate(&active_set(), &batch).unwrap_err();
        assert_eq!(
            err,
            ComparisonValidationError::DuplicateComparison {
                pair: pair("price", "size")
            }
        );
    }

    #[test]
    fn duplicate_with_identical_orientation_is_rejected() {
        let mut batch = full_batch();
        batch.push(judgment("price", "size", 3.0));
        let err = PairwiseComparisonValidator::validate(&active_set(), &batch).unwrap_err();
        assert!(matches!(err, ComparisonValidationError::DuplicateComparison { .. }));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Flipping any judgment (swap keys, invert value) yields the same canonical batch.
            #[test]
            fn canonical_form_ignores_submission_orientation(
                flips in proptest::collection::vec(any::<bool>(), 6),
                values in proptest::collection::vec(1u32..=9, 6),
            ) {
                let straight = full_batch()
                    .into_iter()
                    .zip(values.iter())
                    .map(|(j, v)| judgment(&j.criterion_a_key, &j.criterion_b_key, *v as f64))
                    .collect::<Vec<_>>();
                let flipped = straight
                    .iter()
                    .zip(flips.iter())
                    .map(|(j, flip)| {
                        if *flip {
                            judgment(&j.criterion_b_key, &j.criterion_a_key, 1.0 / j.value)
                        } else {
                            j.clone()
                        }
                    })
                    .collect::<Vec<_>>();

                let expected = PairwiseComparisonValidator::validate(&active_set(), &straight).unwrap();
                let actual = PairwiseComparisonValidator::validate(&active_set(), &flipped).unwrap();

                for (e, a) in expected.iter().zip(actual.iter()) {
                    prop_assert_eq!(e.ids(), a.ids());
                    prop_assert!((e.value() - a.value()).abs() < 1e-12);
                }
            }
        }
    }
}
