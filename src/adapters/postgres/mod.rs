//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresPreferenceRepository` - Profiles and pairwise comparisons
//! - `PostgresCriteriaReader` - Criteria catalog
//! - `PostgresRecommendationReader` - Snapshot reads for recommendations

mod criteria_reader;
mod preference_repository;
mod recommendation_reader;
mod rows;

pub use criteria_reader::PostgresCriteriaReader;
pub use preference_repository::PostgresPreferenceRepository;
pub use recommendation_reader::PostgresRecommendationReader;
