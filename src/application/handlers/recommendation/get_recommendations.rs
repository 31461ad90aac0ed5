//! GetRecommendationsHandler - Ranks eligible properties for the caller.

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::foundation::UserId;
use crate::domain::recommendation::{
    RecommendationError, RecommendationOrchestrator, Recommendations,
};
use crate::ports::RecommendationReader;

/// Query for the caller's recommendations.
#[derive(Debug, Clone)]
pub struct GetRecommendationsQuery {
    pub user_id: UserId,
}

/// Handler for recommendation requests.
pub struct GetRecommendationsHandler {
    reader: Arc<dyn RecommendationReader>,
    orchestrator: RecommendationOrchestrator,
}

impl GetRecommendationsHandler {
    pub fn new(reader: Arc<dyn RecommendationReader>, orchestrator: RecommendationOrchestrator) -> Self {
        Self {
            reader,
            orchestrator,
        }
    }

    pub async fn handle(
        &self,
        query: GetRecommendationsQuery,
    ) -> Result<Recommendations, RecommendationError> {
        // 1. One consistent read of everything the computation needs
        let snapshot = self.reader.load_snapshot(&query.user_id).await?;
        debug!(
            user_id = %query.user_id,
            comparisons = snapshot.comparisons.len(),
            candidates = snapshot.candidates.len(),
            "Recommendation snapshot loaded"
        );

        // 2. Pure computation
        match self.orchestrator.recommend(&snapshot) {
            Ok(recommendations) => {
                info!(
                    user_id = %query.user_id,
                    ranked = recommendations.meta.ranked_count,
                    candidates = recommendations.meta.candidates_total,
                    missing_scores = recommendations.meta.missing_score_count,
                    "Recommendations computed"
                );
                Ok(recommendations)
            }
            Err(err) => {
                match &err {
                    RecommendationError::InconsistentJudgments { cr, threshold } => {
                        info!(user_id = %query.user_id, cr, threshold, "Judgments rejected as inconsistent");
                    }
                    RecommendationError::MissingCriteriaConfiguration { .. }
                    | RecommendationError::Configuration(_)
                    | RecommendationError::DegenerateInput(_) => {
                        error!(user_id = %query.user_id, error = %err, "Recommendation failed");
                    }
                    _ => {
                        warn!(user_id = %query.user_id, code = %err.code(), "Recommendation unavailable");
                    }
                }
                Err(err)
            }
        }
    }
}
