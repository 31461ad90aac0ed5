//! Recommendation query handlers.

mod get_recommendations;

pub use get_recommendations::{GetRecommendationsHandler, GetRecommendationsQuery};
