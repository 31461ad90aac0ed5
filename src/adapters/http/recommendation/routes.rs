//! HTTP routes for recommendation endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_recommendations, RecommendationHandlers};

/// Creates the recommendation router.
pub fn recommendation_routes(handlers: RecommendationHandlers) -> Router {
    Router::new()
        .route("/recommendations", get(get_recommendations))
        .with_state(handlers)
}
