//! RecommendationOrchestrator - Weights, gate, matrix, rank, explain.

use std::collections::BTreeMap;

use crate::domain::analysis::{AhpResult, AhpSolver, Direction, TopsisRanker};
use crate::domain::preference::CriteriaSet;

use super::{
    AhpExplanation, AreaScoreDictionary, DecisionMatrix, DecisionMatrixBuilder, Explanation,
    PropertySummary, RankedRecommendation, RecommendationError, RecommendationMeta,
    RecommendationPolicy, RecommendationSnapshot, Recommendations, TopsisExplanation,
};

/// Produces ranked, explainable recommendations from a snapshot.
#[derive(Debug, Clone, Default)]
pub struct RecommendationOrchestrator {
    policy: RecommendationPolicy,
    solver: AhpSolver,
}

impl RecommendationOrchestrator {
    pub fn new(policy: RecommendationPolicy) -> Self {
        let solver = AhpSolver::new(policy.consistency().clone());
        Self { policy, solver }
    }

    pub fn policy(&self) -> &RecommendationPolicy {
        &self.policy
    }

    /// Runs the full pipeline.
    ///
    /// # Order
    /// 1. Profile exists, else ProfileNotFound
    /// 2. At least one stored comparison, else ComparisonsNotSet
    /// 3. Every configured criterion is active, else MissingCriteriaConfiguration
    /// 4. AHP weights; an inconsistent verdict stops here
    /// 5. Decision matrix over the candidates, strict category check
    /// 6. No surviving rows: empty success with metadata
    /// 7. TOPSIS ranking and explanation
    pub fn recommend(
        &self,
        snapshot: &RecommendationSnapshot,
    ) -> Result<Recommendations, RecommendationError> {
        if snapshot.profile.is_none() {
            return Err(RecommendationError::ProfileNotFound);
        }
        if snapshot.comparisons.is_empty() {
            return Err(RecommendationError::ComparisonsNotSet);
        }

        let criteria = CriteriaSet::ordered_by(&snapshot.criteria, self.policy.criteria_order())
            .map_err(|missing| RecommendationError::MissingCriteriaConfiguration { missing })?;

        let ahp = self
            .solver
            .solve(&criteria, &snapshot.comparisons)?
            .into_accepted()?;

        let areas = AreaScoreDictionary::from_areas(&snapshot.areas);
        let matrix = DecisionMatrixBuilder::new(self.policy.category_scale(), &areas)
            .strict(self.policy.strict_category_mapping())
            .build(&criteria, &snapshot.candidates)?;

        let meta = self.meta(&criteria, &matrix);
        if matrix.is_empty() {
            return Ok(Recommendations {
                items: Vec::new(),
                meta,
            });
        }

        let directions: Vec<Direction> = criteria
            .iter()
            .map(|c| Direction::from_is_benefit(c.is_benefit))
            .collect();
        let ranked = TopsisRanker::rank(&matrix.values(), &ahp.weights, &directions)?;

        let keys: Vec<String> = criteria.keys().iter().map(|k| k.to_string()).collect();
        let ahp_explanation = explain_ahp(&keys, &ahp);

        let items = ranked
            .into_iter()
            .map(|outcome| {
                let row = &matrix.rows[outcome.row];
                let candidate = &snapshot.candidates[row.candidate];
                RankedRecommendation {
                    candidate_ref: candidate.reference.clone(),
                    property: PropertySummary::from(candidate),
                    score: outcome.score,
                    explain: Explanation {
                        ahp: ahp_explanation.clone(),
                        topsis: TopsisExplanation {
                            d_best: outcome.d_best,
                            d_worst: outcome.d_worst,
                            criteria_values: keyed(&keys, &row.values),
                        },
                    },
                }
            })
            .collect::<Vec<_>>();

        Ok(Recommendations {
            meta: RecommendationMeta {
                ranked_count: items.len(),
                ..meta
            },
            items,
        })
    }

    fn meta(&self, criteria: &CriteriaSet, matrix: &DecisionMatrix) -> RecommendationMeta {
        RecommendationMeta {
            criteria_order: criteria.keys().iter().map(|k| k.to_string()).collect(),
            is_benefit: criteria.is_benefit(),
            cr_threshold: self.policy.consistency().threshold(),
            candidates_total: matrix.candidates_total,
            ranked_count: 0,
            missing_score_count: matrix.missing_score_count,
            unknown_categories: matrix.unknown_categories.iter().cloned().collect(),
        }
    }
}

fn explain_ahp(keys: &[String], ahp: &AhpResult) -> AhpExplanation {
    AhpExplanation {
        weights: keyed(keys, &ahp.weights),
        cr: ahp.consistency_ratio,
    }
}

fn keyed(keys: &[String], values: &[f64]) -> BTreeMap<String, f64> {
    keys.iter().cloned().zip(values.iter().copied()).collect()
}
