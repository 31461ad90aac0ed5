//! GetPreferencesHandler - The caller's profile and stored comparisons.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::preference::{ComparisonView, PreferenceError, PreferenceProfile};
use crate::ports::{CriteriaReader, PreferenceRepository};

/// Query for the caller's preferences.
#[derive(Debug, Clone)]
pub struct GetPreferencesQuery {
    pub user_id: UserId,
}

/// Profile with its comparisons resolved to criterion keys and labels.
#[derive(Debug, Clone)]
pub struct PreferencesView {
    pub profile: PreferenceProfile,
    pub comparisons: Vec<ComparisonView>,
}

/// Handler for reading preferences.
pub struct GetPreferencesHandler {
    repository: Arc<dyn PreferenceRepository>,
    criteria: Arc<dyn CriteriaReader>,
}

impl GetPreferencesHandler {
    pub fn new(repository: Arc<dyn PreferenceRepository>, criteria: Arc<dyn CriteriaReader>) -> Self {
        Self {
            repository,
            criteria,
        }
    }

    pub async fn handle(&self, query: GetPreferencesQuery) -> Result<PreferencesView, PreferenceError> {
        let profile = self
            .repository
            .find_profile_by_user(&query.user_id)
            .await?
            .ok_or(PreferenceError::ProfileNotFound)?;

        let stored = self.repository.list_comparisons(profile.id()).await?;
        let criteria = self.criteria.list_criteria().await?;

        Ok(PreferencesView {
            comparisons: ComparisonView::resolve_all(&stored, &criteria),
            profile,
        })
    }
}
