//! HTTP DTOs for preference profile endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{PreferencesView, SubmitComparisonsResult};
use crate::domain::foundation::Timestamp;
use crate::domain::preference::{ComparisonView, PairwiseJudgment, PreferenceProfile};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create or rename the caller's profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// One pairwise judgment as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct PairwiseComparisonRequest {
    pub criterion_a_key: String,
    pub criterion_b_key: String,
    pub value: f64,
}

impl From<PairwiseComparisonRequest> for PairwiseJudgment {
    fn from(req: PairwiseComparisonRequest) -> Self {
        PairwiseJudgment::new(req.criterion_a_key, req.criterion_b_key, req.value)
    }
}

/// Request to replace the caller's pairwise comparisons.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitComparisonsRequest {
    pub comparisons: Vec<PairwiseComparisonRequest>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl From<&PreferenceProfile> for ProfileResponse {
    fn from(profile: &PreferenceProfile) -> Self {
        Self {
            id: profile.id().to_string(),
            user_id: profile.user_id().to_string(),
            name: profile.name().to_string(),
            created_at: *profile.created_at(),
            updated_at: profile.updated_at().copied(),
        }
    }
}

/// Profile together with its stored comparisons.
#[derive(Debug, Clone, Serialize)]
pub struct PreferencesResponse {
    pub profile: ProfileResponse,
    pub comparisons: Vec<ComparisonView>,
}

impl From<PreferencesView> for PreferencesResponse {
    fn from(view: PreferencesView) -> Self {
        Self {
            profile: ProfileResponse::from(&view.profile),
            comparisons: view.comparisons,
        }
    }
}

/// Comparisons stored by a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonsResponse {
    pub profile_id: String,
    pub comparisons: Vec<ComparisonView>,
}

impl From<SubmitComparisonsResult> for ComparisonsResponse {
    fn from(result: SubmitComparisonsResult) -> Self {
        Self {
            profile_id: result.profile_id.to_string(),
            comparisons: result.comparisons,
        }
    }
}
