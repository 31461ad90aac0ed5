//! SubmitComparisonsHandler - Validates and replaces the caller's pairwise comparisons.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::{ProfileId, UserId};
use crate::domain::preference::{
    ComparisonView, CriteriaSet, PairwiseComparisonValidator, PairwiseJudgment, PreferenceError,
};
use crate::ports::{CriteriaReader, PreferenceRepository};

/// Command carrying a complete batch of judgments.
#[derive(Debug, Clone)]
pub struct SubmitComparisonsCommand {
    pub user_id: UserId,
    pub comparisons: Vec<PairwiseJudgment>,
}

/// The comparisons now stored for the profile.
#[derive(Debug, Clone)]
pub struct SubmitComparisonsResult {
    pub profile_id: ProfileId,
    pub comparisons: Vec<ComparisonView>,
}

/// Handler for comparison submissions.
pub struct SubmitComparisonsHandler {
    repository: Arc<dyn PreferenceRepository>,
    criteria: Arc<dyn CriteriaReader>,
}

impl SubmitComparisonsHandler {
    pub fn new(repository: Arc<dyn PreferenceRepository>, criteria: Arc<dyn CriteriaReader>) -> Self {
        Self {
            repository,
            criteria,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitComparisonsCommand,
    ) -> Result<SubmitComparisonsResult, PreferenceError> {
        // 1. The profile must exist
        let profile = self
            .repository
            .find_profile_by_user(&cmd.user_id)
            .await?
            .ok_or(PreferenceError::ProfileNotFound)?;

        // 2. Need at least one pair to compare
        let all_criteria = self.criteria.list_criteria().await?;
        let active = CriteriaSet::new(all_criteria.clone());
        if active.len() < 2 {
            return Err(PreferenceError::NotEnoughCriteria {
                count: active.len(),
            });
        }

        // 3. Validate and canonicalize
        let canonical = PairwiseComparisonValidator::validate(&active, &cmd.comparisons).map_err(|err| {
            warn!(user_id = %cmd.user_id, code = %err.code(), error = %err, "Pairwise comparisons rejected");
            err
        })?;

        // 4. Replace atomically
        let stored = self
            .repository
            .replace_comparisons(profile.id(), &canonical)
            .await?;

        info!(
            user_id = %cmd.user_id,
            profile_id = %profile.id(),
            count = stored.len(),
            "Pairwise comparisons replaced"
        );

        Ok(SubmitComparisonsResult {
            profile_id: *profile.id(),
            comparisons: ComparisonView::resolve_all(&stored, &all_criteria),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        test_user_id, MockCriteriaReader, MockPreferenceRepository,
    };
    use crate::domain::foundation::{CriterionId, ErrorCode};
    use crate::domain::preference::criterion::fixtures::{criterion, rental_criteria};
    use crate::domain::preference::{
        CanonicalComparison, ComparisonValidationError, PreferenceProfile,
    };

    fn judgment(a: &str, b: &str, v: f64) -> PairwiseJudgment {
        PairwiseJudgment::new(a, b, v)
    }

    fn full_batch() -> Vec<PairwiseJudgment> {
        vec![
            judgment("price", "size", 3.0),
            judgment("price", "property_type", 5.0),
            judgment("area_score", "price", 1.0 / 3.0),
            judgment("size", "property_type", 2.0),
            judgment("size", "area_score", 1.0),
            judgment("property_type", "area_score", 0.5),
        ]
    }

    fn setup() -> (Arc<MockPreferenceRepository>, PreferenceProfile, SubmitComparisonsHandler) {
        let profile = PreferenceProfile::new(test_user_id(), None).unwrap();
        let repo = Arc::new(MockPreferenceRepository::with_profile(profile.clone()));
        let handler = SubmitComparisonsHandler::new(
            repo.clone(),
            Arc::new(MockCriteriaReader::new(rental_criteria())),
        );
        (repo, profile, handler)
    }

    fn command(comparisons: Vec<PairwiseJudgment>) -> SubmitComparisonsCommand {
        SubmitComparisonsCommand {
            user_id: test_user_id(),
            comparisons,
        }
    }

    #[tokio::test]
    async fn stores_canonical_comparisons() {
        let (repo, profile, handler) = setup();

        let result = handler.handle(command(full_batch())).await.unwrap();

        assert_eq!(result.profile_id, *profile.id());
        assert_eq!(result.comparisons.len(), 6);
        let stored = repo.stored_comparisons();
        assert_eq!(stored.len(), 6);
        // area_score over price at 1/3 is stored as price over area_score at 3.
        let price_area = stored
            .iter()
            .find(|s| s.comparison.ids() == (CriterionId::new(1), CriterionId::new(4)))
            .unwrap();
        assert!((price_area.comparison.value() - 3.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn resubmission_replaces_previous_batch() {
        let (repo, profile, handler) = setup();
        repo.seed_comparisons(
            *profile.id(),
            &[CanonicalComparison::orient(CriterionId::new(1), CriterionId::new(2), 9.0)],
        );

        handler.handle(command(full_batch())).await.unwrap();

        let stored = repo.stored_comparisons();
        assert_eq!(stored.len(), 6);
        assert!(stored.iter().all(|s| s.comparison.value() != 9.0));
    }

    #[tokio::test]
    async fn invalid_batch_leaves_previous_batch_untouched() {
        let (repo, profile, handler) = setup();
        repo.seed_comparisons(
            *profile.id(),
            &[CanonicalComparison::orient(CriterionId::new(1), CriterionId::new(2), 9.0)],
        );
        let mut batch = full_batch();
        batch.pop();

        let err = handler.handle(command(batch)).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::IncompletePairs);
        assert!(matches!(
            err,
            PreferenceError::InvalidComparisons(ComparisonValidationError::IncompletePairs { .. })
        ));
        assert_eq!(repo.stored_comparisons().len(), 1);
    }

    #[tokio::test]
    async fn missing_profile_is_rejected() {
        let handler = SubmitComparisonsHandler::new(
            Arc::new(MockPreferenceRepository::new()),
            Arc::new(MockCriteriaReader::new(rental_criteria())),
        );
        let err = handler.handle(command(full_batch())).await.unwrap_err();
        assert_eq!(err, PreferenceError::ProfileNotFound);
    }

    #[tokio::test]
    async fn fewer_than_two_active_criteria_is_rejected() {
        let profile = PreferenceProfile::new(test_user_id(), None).unwrap();
        let handler = SubmitComparisonsHandler::new(
            Arc::new(MockPreferenceRepository::with_profile(profile)),
            Arc::new(MockCriteriaReader::new(vec![
                criterion(1, "price", false),
                criterion(2, "size", true).deactivated(),
            ])),
        );
        let err = handler.handle(command(vec![])).await.unwrap_err();
        assert_eq!(err, PreferenceError::NotEnoughCriteria { count: 1 });
        assert_eq!(err.code(), ErrorCode::NotEnoughCriteria);
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_infrastructure_error() {
        let profile = PreferenceProfile::new(test_user_id(), None).unwrap();
        let handler = SubmitComparisonsHandler::new(
            Arc::new(MockPreferenceRepository::with_profile(profile).failing_writes()),
            Arc::new(MockCriteriaReader::new(rental_criteria())),
        );
        let err = handler.handle(command(full_batch())).await.unwrap_err();
        assert!(matches!(err, PreferenceError::Infrastructure(_)));
    }
}
