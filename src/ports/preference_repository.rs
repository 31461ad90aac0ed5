//! Preference repository port (write side).
//!
//! Persists preference profiles and their canonical pairwise comparisons.
//!
//! # Design
//!
//! - **One profile per user**: profiles are looked up by owning user
//! - **Replace, never merge**: a comparison batch replaces the previous one
//!   atomically; a failed replace leaves the prior batch intact

use crate::domain::foundation::{DomainError, ProfileId, UserId};
use crate::domain::preference::{CanonicalComparison, PreferenceProfile, StoredComparison};
use async_trait::async_trait;

/// Repository port for preference profiles and pairwise comparisons.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Find the profile owned by a user.
    ///
    /// Returns `None` if the user has not created one yet.
    async fn find_profile_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<PreferenceProfile>, DomainError>;

    /// Insert or update a profile, keyed by its id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save_profile(&self, profile: &PreferenceProfile) -> Result<(), DomainError>;

    /// List the stored comparisons of a profile, ordered by criterion ids.
    async fn list_comparisons(
        &self,
        profile_id: &ProfileId,
    ) -> Result<Vec<StoredComparison>, DomainError>;

    /// Atomically replace every comparison of a profile.
    ///
    /// Concurrent replaces for the same profile are serialized.
    ///
    /// # Errors
    ///
    /// - `ProfileNotFound` if the profile doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn replace_comparisons(
        &self,
        profile_id: &ProfileId,
        comparisons: &[CanonicalComparison],
    ) -> Result<Vec<StoredComparison>, DomainError>;
}
