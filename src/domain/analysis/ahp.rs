//! AHP Solver - Priority weights and consistency from pairwise judgments.

use serde::{Deserialize, Serialize};

use crate::domain::preference::{CanonicalComparison, CriteriaSet};

use super::AnalysisError;

/// Saaty's random consistency index for matrix sizes 1 through 10.
pub const SAATY_RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Judgments are accepted when the consistency ratio is strictly below this.
pub const CR_THRESHOLD: f64 = 0.10;

/// Random index table and acceptance threshold used by [`AhpSolver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyPolicy {
    random_index: Vec<f64>,
    threshold: f64,
}

impl ConsistencyPolicy {
    /// Builds a policy from a random index table indexed by `n - 1`.
    pub fn new(random_index: Vec<f64>, threshold: f64) -> Self {
        Self {
            random_index,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Random index for an `n x n` matrix, if the table covers it.
    pub fn random_index(&self, n: usize) -> Option<f64> {
        n.checked_sub(1).and_then(|i| self.random_index.get(i)).copied()
    }

    /// Largest matrix size the table covers.
    pub fn max_size(&self) -> usize {
        self.random_index.len()
    }
}

impl Default for ConsistencyPolicy {
    fn default() -> Self {
        Self::new(SAATY_RANDOM_INDEX.to_vec(), CR_THRESHOLD)
    }
}

/// Square reciprocal matrix of pairwise judgments, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseMatrix {
    n: usize,
    values: Vec<f64>,
}

impl PairwiseMatrix {
    /// Creates an `n x n` matrix of ones.
    pub fn identity(n: usize) -> Self {
        Self {
            n,
            values: vec![1.0; n * n],
        }
    }

    /// Fills a matrix from canonical comparisons, indexed by the position of
    /// each criterion in `criteria`.
    ///
    /// Pairs without a comparison stay at 1 (equal importance).
    pub fn from_comparisons(
        criteria: &CriteriaSet,
        comparisons: &[CanonicalComparison],
    ) -> Result<Self, AnalysisError> {
        let mut matrix = Self::identity(criteria.len());

        for comparison in comparisons {
            let i = criteria
                .position_of(comparison.criterion_a())
                .ok_or(AnalysisError::UnknownCriterion {
                    id: comparison.criterion_a(),
                })?;
            let j = criteria
                .position_of(comparison.criterion_b())
                .ok_or(AnalysisError::UnknownCriterion {
                    id: comparison.criterion_b(),
                })?;

            if i == j {
                return Err(AnalysisError::degenerate(format!(
                    "criterion {} compared with itself",
                    comparison.criterion_a()
                )));
            }
            let value = comparison.value();
            if !value.is_finite() || value <= 0.0 {
                return Err(AnalysisError::degenerate(format!(
                    "non-positive judgment {} for ({}, {})",
                    value,
                    comparison.criterion_a(),
                    comparison.criterion_b()
                )));
            }

            matrix.set(i, j, value);
        }

        Ok(matrix)
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Sets `A[i][j] = value` and `A[j][i] = 1 / value`.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.n + j] = value;
        self.values[j * self.n + i] = 1.0 / value;
    }

    fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }
}

/// Outcome of an AHP computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpResult {
    /// Priority vector in criteria order, summing to 1.
    pub weights: Vec<f64>,
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    pub threshold: f64,
    pub accepted: bool,
}

impl AhpResult {
    /// Returns the result if accepted, otherwise an inconsistency error
    /// carrying the ratio and the threshold.
    pub fn into_accepted(self) -> Result<Self, AnalysisError> {
        if self.accepted {
            Ok(self)
        } else {
            Err(AnalysisError::InconsistentJudgments {
                consistency_ratio: self.consistency_ratio,
                threshold: self.threshold,
            })
        }
    }
}

/// Derives priority weights with the geometric-mean method.
#[derive(Debug, Clone, Default)]
pub struct AhpSolver {
    policy: ConsistencyPolicy,
}

impl AhpSolver {
    pub fn new(policy: ConsistencyPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ConsistencyPolicy {
        &self.policy
    }

    /// Solves the judgments for the given ordered criteria.
    pub fn solve(
        &self,
        criteria: &CriteriaSet,
        comparisons: &[CanonicalComparison],
    ) -> Result<AhpResult, AnalysisError> {
        let n = criteria.len();
        if n < 2 {
            return Err(AnalysisError::InsufficientCriteria { count: n });
        }
        let matrix = PairwiseMatrix::from_comparisons(criteria, comparisons)?;
        self.solve_matrix(&matrix)
    }

    /// Solves an already assembled reciprocal matrix.
    ///
    /// # Algorithm
    /// - `w_i = (Π_j A[i][j])^(1/n)`, normalized to sum 1
    /// - `λ_i = (Aw)_i / w_i`, `λmax = mean(λ_i)`
    /// - `CI = (λmax - n) / (n - 1)`, zero when `n <= 2`
    /// - `CR = CI / RI(n)`, zero when `RI(n) = 0`
    ///
    /// # Edge Cases
    /// - `n < 2`: InsufficientCriteria
    /// - `n` beyond the random index table: UnsupportedMatrixSize
    /// - Zero or non-finite weights: DegenerateMatrix
    pub fn solve_matrix(&self, matrix: &PairwiseMatrix) -> Result<AhpResult, AnalysisError> {
        let n = matrix.size();
        if n < 2 {
            return Err(AnalysisError::InsufficientCriteria { count: n });
        }
        let random_index = self
            .policy
            .random_index(n)
            .ok_or(AnalysisError::UnsupportedMatrixSize { size: n })?;

        let geometric_means: Vec<f64> = (0..n)
            .map(|i| matrix.row(i).iter().product::<f64>().powf(1.0 / n as f64))
            .collect();
        let total: f64 = geometric_means.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(AnalysisError::degenerate("geometric mean sum is zero"));
        }

        let weights: Vec<f64> = geometric_means.iter().map(|g| g / total).collect();
        if let Some(bad) = weights.iter().position(|w| !w.is_finite() || *w <= 0.0) {
            return Err(AnalysisError::degenerate(format!(
                "weight at position {} is {}",
                bad, weights[bad]
            )));
        }

        let lambda_max = (0..n)
            .map(|i| {
                let aw: f64 = matrix
                    .row(i)
                    .iter()
                    .zip(&weights)
                    .map(|(a, w)| a * w)
                    .sum();
                aw / weights[i]
            })
            .sum::<f64>()
            / n as f64;

        let consistency_index = if n <= 2 {
            0.0
        } else {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        };
        let consistency_ratio = if random_index == 0.0 {
            0.0
        } else {
            consistency_index / random_index
        };

        let threshold = self.policy.threshold();
        Ok(AhpResult {
            weights,
            lambda_max,
            consistency_index,
            consistency_ratio,
            threshold,
            accepted: consistency_ratio < threshold,
        })
    }
}
