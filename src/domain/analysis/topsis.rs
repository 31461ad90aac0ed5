//! TOPSIS Ranker - Closeness to the ideal solution.

use serde::{Deserialize, Serialize};

use super::AnalysisError;

/// Whether higher or lower raw values are preferred for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Benefit,
    Cost,
}

impl Direction {
    pub fn from_is_benefit(is_benefit: bool) -> Self {
        if is_benefit {
            Self::Benefit
        } else {
            Self::Cost
        }
    }

    pub fn is_benefit(&self) -> bool {
        matches!(self, Self::Benefit)
    }
}

/// Ranking outcome for one row of the decision matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisOutcome {
    /// Index of the row in the input matrix.
    pub row: usize,
    /// Closeness coefficient in `[0, 1]`.
    pub score: f64,
    pub d_best: f64,
    pub d_worst: f64,
}

/// TOPSIS ranking functions.
pub struct TopsisRanker;

impl TopsisRanker {
    /// Ranks the rows of `matrix` against `weights` and `directions`.
    ///
    /// # Algorithm
    /// 1. Vector-normalize each column: `r_ij = x_ij / sqrt(Σ_i x_ij²)`
    /// 2. Weight: `v_ij = r_ij * w_j`
    /// 3. Ideal best/worst per column (benefit: max/min, cost: min/max)
    /// 4. Euclidean distances `d_best`, `d_worst`
    /// 5. Score `d_worst / (d_best + d_worst)`
    ///
    /// # Edge Cases
    /// - Empty matrix: Returns empty Vec
    /// - Column of zeros: Divisor 1, column contributes nothing
    /// - `d_best + d_worst == 0` (all rows identical): Score 0
    /// - Ties: Input order preserved
    pub fn rank(
        matrix: &[Vec<f64>],
        weights: &[f64],
        directions: &[Direction],
    ) -> Result<Vec<TopsisOutcome>, AnalysisError> {
        let columns = weights.len();
        if directions.len() != columns {
            return Err(AnalysisError::DimensionMismatch {
                what: "directions",
                expected: columns,
                actual: directions.len(),
            });
        }
        if let Some(row) = matrix.iter().find(|row| row.len() != columns) {
            return Err(AnalysisError::DimensionMismatch {
                what: "matrix row",
                expected: columns,
                actual: row.len(),
            });
        }
        if matrix.is_empty() {
            return Ok(Vec::new());
        }

        let weighted = Self::weighted_normalized(matrix, weights);
        let (best, worst) = Self::ideal_solutions(&weighted, directions);

        let mut outcomes: Vec<TopsisOutcome> = weighted
            .iter()
            .enumerate()
            .map(|(row, values)| {
                let d_best = euclidean(values, &best);
                let d_worst = euclidean(values, &worst);
                let denominator = d_best + d_worst;
                let score = if denominator == 0.0 {
                    0.0
                } else {
                    d_worst / denominator
                };
                TopsisOutcome {
                    row,
                    score,
                    d_best,
                    d_worst,
                }
            })
            .collect();

        // sort_by is stable, so equal scores keep input order.
        outcomes.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(outcomes)
    }

    fn weighted_normalized(matrix: &[Vec<f64>], weights: &[f64]) -> Vec<Vec<f64>> {
        let divisors: Vec<f64> = (0..weights.len())
            .map(|j| {
                let norm = matrix.iter().map(|row| row[j] * row[j]).sum::<f64>().sqrt();
                if norm == 0.0 {
                    1.0
                } else {
                    norm
                }
            })
            .collect();

        matrix
            .iter()
            .map(|row| {
                row.iter()
                    .zip(divisors.iter().zip(weights))
                    .map(|(x, (d, w))| x / d * w)
                    .collect()
            })
            .collect()
    }

    fn ideal_solutions(weighted: &[Vec<f64>], directions: &[Direction]) -> (Vec<f64>, Vec<f64>) {
        let mut best = Vec::with_capacity(directions.len());
        let mut worst = Vec::with_capacity(directions.len());

        for (j, direction) in directions.iter().enumerate() {
            let column = weighted.iter().map(|row| row[j]);
            let max = column.clone().fold(f64::NEG_INFINITY, f64::max);
            let min = column.fold(f64::INFINITY, f64::min);
            match direction {
                Direction::Benefit => {
                    best.push(max);
                    worst.push(min);
                }
                Direction::Cost => {
                    best.push(min);
                    worst.push(max);
                }
            }
        }

        (best, worst)
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
