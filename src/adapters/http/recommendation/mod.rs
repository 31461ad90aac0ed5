//! HTTP adapter for recommendation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::RecommendationsResponse;
pub use handlers::RecommendationHandlers;
pub use routes::recommendation_routes;
