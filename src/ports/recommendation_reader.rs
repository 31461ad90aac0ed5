//! Recommendation reader port (read side).
//!
//! Loads everything a recommendation needs in a single consistent read so
//! that a concurrent comparison replace is observed entirely or not at all.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::recommendation::RecommendationSnapshot;
use async_trait::async_trait;

/// Read-only port for recommendation inputs.
#[async_trait]
pub trait RecommendationReader: Send + Sync {
    /// Snapshot of the user's profile and comparisons, all criteria, the
    /// eligible (available) candidates and the area dictionary.
    ///
    /// A missing profile yields `profile: None` with no comparisons.
    async fn load_snapshot(&self, user_id: &UserId) -> Result<RecommendationSnapshot, DomainError>;
}
