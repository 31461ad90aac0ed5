//! In-Memory Rental Store Adapter
//!
//! Keeps criteria, profiles, comparisons and the property catalog in memory.
//! Implements every port, so a router can run without a database in tests
//! and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, UserId};
use crate::domain::preference::{
    CanonicalComparison, Criterion, PreferenceProfile, StoredComparison,
};
use crate::domain::recommendation::{Area, CandidateProperty, RecommendationSnapshot};
use crate::ports::{CriteriaReader, PreferenceRepository, RecommendationReader};

#[derive(Debug, Default)]
struct StoreState {
    criteria: Vec<Criterion>,
    profiles: HashMap<ProfileId, PreferenceProfile>,
    comparisons: HashMap<ProfileId, Vec<StoredComparison>>,
    candidates: Vec<CandidateProperty>,
    areas: Vec<Area>,
}

impl StoreState {
    fn profile_for(&self, user_id: &UserId) -> Option<&PreferenceProfile> {
        self.profiles.values().find(|p| p.user_id() == user_id)
    }
}

/// In-memory store for preferences and the rental catalog.
///
/// Every operation takes the single lock once, so a snapshot read never
/// interleaves with a comparison replace.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRentalStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryRentalStore {
    /// Create a store with the given criteria catalog.
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                criteria,
                ..StoreState::default()
            })),
        }
    }

    /// Add an eligible candidate property.
    pub async fn add_candidate(&self, candidate: CandidateProperty) {
        self.state.write().await.candidates.push(candidate);
    }

    /// Add an area to the score dictionary.
    pub async fn add_area(&self, area: Area) {
        self.state.write().await.areas.push(area);
    }

    /// Get the number of stored profiles
    pub async fn profile_count(&self) -> usize {
        self.state.read().await.profiles.len()
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryRentalStore {
    async fn find_profile_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<PreferenceProfile>, DomainError> {
        Ok(self.state.read().await.profile_for(user_id).cloned())
    }

    async fn save_profile(&self, profile: &PreferenceProfile) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if let Some(existing) = state.profile_for(profile.user_id()) {
            if existing.id() != profile.id() {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("User {} already has a preference profile", profile.user_id()),
                ));
            }
        }
        state.profiles.insert(*profile.id(), profile.clone());
        Ok(())
    }

    async fn list_comparisons(
        &self,
        profile_id: &ProfileId,
    ) -> Result<Vec<StoredComparison>, DomainError> {
        let state = self.state.read().await;
        Ok(state.comparisons.get(profile_id).cloned().unwrap_or_default())
    }

    async fn replace_comparisons(
        &self,
        profile_id: &ProfileId,
        comparisons: &[CanonicalComparison],
    ) -> Result<Vec<StoredComparison>, DomainError> {
        let mut state = self.state.write().await;
        if !state.profiles.contains_key(profile_id) {
            return Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Preference profile not found: {}", profile_id),
            ));
        }

        let mut stored: Vec<StoredComparison> = comparisons
            .iter()
            .map(|c| StoredComparison::new(*profile_id, *c))
            .collect();
        stored.sort_by_key(|s| s.comparison.ids());
        state.comparisons.insert(*profile_id, stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl CriteriaReader for InMemoryRentalStore {
    async fn list_criteria(&self) -> Result<Vec<Criterion>, DomainError> {
        let mut criteria = self.state.read().await.criteria.clone();
        criteria.sort_by_key(|c| c.id);
        Ok(criteria)
    }
}

#[async_trait]
impl RecommendationReader for InMemoryRentalStore {
    async fn load_snapshot(&self, user_id: &UserId) -> Result<RecommendationSnapshot, DomainError> {
        let state = self.state.read().await;
        let profile = state.profile_for(user_id).cloned();
        let comparisons = profile
            .as_ref()
            .and_then(|p| state.comparisons.get(p.id()))
            .map(|stored| stored.iter().map(|s| s.comparison).collect())
            .unwrap_or_default();

        let mut criteria = state.criteria.clone();
        criteria.sort_by_key(|c| c.id);

        Ok(RecommendationSnapshot {
            profile,
            comparisons,
            criteria,
            candidates: state.candidates.clone(),
            areas: state.areas.clone(),
        })
    }
}
