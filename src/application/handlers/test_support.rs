//! Mutex-backed port doubles shared by handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, UserId};
use crate::domain::preference::{
    CanonicalComparison, Criterion, PreferenceProfile, StoredComparison,
};
use crate::domain::recommendation::RecommendationSnapshot;
use crate::ports::{CriteriaReader, PreferenceRepository, RecommendationReader};

pub struct MockPreferenceRepository {
    profiles: Mutex<Vec<PreferenceProfile>>,
    comparisons: Mutex<Vec<StoredComparison>>,
    pub save_calls: Mutex<u32>,
    fail_writes: bool,
}

impl MockPreferenceRepository {
    pub fn new() -> Self {
        Self {
            profiles: Mutex::new(Vec::new()),
            comparisons: Mutex::new(Vec::new()),
            save_calls: Mutex::new(0),
            fail_writes: false,
        }
    }

    pub fn with_profile(profile: PreferenceProfile) -> Self {
        let repo = Self::new();
        repo.profiles.lock().unwrap().push(profile);
        repo
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn seed_comparisons(&self, profile_id: ProfileId, comparisons: &[CanonicalComparison]) {
        let mut stored = self.comparisons.lock().unwrap();
        stored.extend(comparisons.iter().map(|c| StoredComparison::new(profile_id, *c)));
    }

    pub fn stored_comparisons(&self) -> Vec<StoredComparison> {
        self.comparisons.lock().unwrap().clone()
    }

    pub fn profiles(&self) -> Vec<PreferenceProfile> {
        self.profiles.lock().unwrap().clone()
    }

    fn simulated_failure() -> DomainError {
        DomainError::new(ErrorCode::DatabaseError, "Simulated write failure")
    }
}

#[async_trait]
impl PreferenceRepository for MockPreferenceRepository {
    async fn find_profile_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<PreferenceProfile>, DomainError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id() == user_id)
            .cloned())
    }

    async fn save_profile(&self, profile: &PreferenceProfile) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(Self::simulated_failure());
        }
        *self.save_calls.lock().unwrap() += 1;
        let mut profiles = self.profiles.lock().unwrap();
        profiles.retain(|p| p.id() != profile.id());
        profiles.push(profile.clone());
        Ok(())
    }

    async fn list_comparisons(
        &self,
        profile_id: &ProfileId,
    ) -> Result<Vec<StoredComparison>, DomainError> {
        Ok(self
            .comparisons
            .lock()
            .unwrap()
            .iter()
            .filter(|c| &c.profile_id == profile_id)
            .cloned()
            .collect())
    }

    async fn replace_comparisons(
        &self,
        profile_id: &ProfileId,
        comparisons: &[CanonicalComparison],
    ) -> Result<Vec<StoredComparison>, DomainError> {
        if self.fail_writes {
            return Err(Self::simulated_failure());
        }
        let fresh: Vec<StoredComparison> = comparisons
            .iter()
            .map(|c| StoredComparison::new(*profile_id, *c))
            .collect();
        let mut stored = self.comparisons.lock().unwrap();
        stored.retain(|c| &c.profile_id != profile_id);
        stored.extend(fresh.iter().cloned());
        Ok(fresh)
    }
}

pub struct MockCriteriaReader {
    criteria: Vec<Criterion>,
}

impl MockCriteriaReader {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }
}

#[async_trait]
impl CriteriaReader for MockCriteriaReader {
    async fn list_criteria(&self) -> Result<Vec<Criterion>, DomainError> {
        Ok(self.criteria.clone())
    }
}

pub struct MockRecommendationReader {
    snapshot: Option<RecommendationSnapshot>,
    pub requested_for: Mutex<Vec<UserId>>,
}

impl MockRecommendationReader {
    pub fn returning(snapshot: RecommendationSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            requested_for: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            snapshot: None,
            requested_for: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RecommendationReader for MockRecommendationReader {
    async fn load_snapshot(&self, user_id: &UserId) -> Result<RecommendationSnapshot, DomainError> {
        self.requested_for.lock().unwrap().push(user_id.clone());
        self.snapshot
            .clone()
            .ok_or_else(|| DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"))
    }
}

pub fn test_user_id() -> UserId {
    UserId::new("test-user-123").unwrap()
}
