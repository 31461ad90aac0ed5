//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PreferenceRepository` - Profiles and pairwise comparisons (write side)
//! - `CriteriaReader` - Active decision criteria
//! - `RecommendationReader` - Consistent snapshot for one recommendation

mod criteria_reader;
mod preference_repository;
mod recommendation_reader;

pub use criteria_reader::CriteriaReader;
pub use preference_repository::PreferenceRepository;
pub use recommendation_reader::RecommendationReader;
