//! HTTP handlers for recommendation endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::CallerIdentity;
use crate::application::{GetRecommendationsHandler, GetRecommendationsQuery};

use super::dto::RecommendationsResponse;

#[derive(Clone)]
pub struct RecommendationHandlers {
    get_handler: Arc<GetRecommendationsHandler>,
}

impl RecommendationHandlers {
    pub fn new(get_handler: Arc<GetRecommendationsHandler>) -> Self {
        Self { get_handler }
    }
}

/// GET /recommendations - Ranked properties for the caller
pub async fn get_recommendations(
    State(handlers): State<RecommendationHandlers>,
    CallerIdentity(user_id): CallerIdentity,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let recommendations = handlers
        .get_handler
        .handle(GetRecommendationsQuery { user_id })
        .await?;
    Ok(Json(recommendations))
}
