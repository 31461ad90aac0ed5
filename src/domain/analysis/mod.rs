//! Analysis Module - Pure numeric services behind a recommendation.
//!
//! # Components
//!
//! - `AhpSolver` - Priority weights and consistency ratio from pairwise judgments
//! - `TopsisRanker` - Closeness-to-ideal ranking of candidate vectors
//!
//! Everything here is synchronous and free of I/O. Inputs are validated
//! domain values; failures are reported as [`AnalysisError`].

mod ahp;
mod errors;
mod topsis;

pub use ahp::{
    AhpResult, AhpSolver, ConsistencyPolicy, PairwiseMatrix, CR_THRESHOLD, SAATY_RANDOM_INDEX,
};
pub use errors::AnalysisError;
pub use topsis::{Direction, TopsisOutcome, TopsisRanker};
