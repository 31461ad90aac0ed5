//! HTTP handlers for preference profile endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::CallerIdentity;
use crate::application::{
    GetPreferencesHandler, GetPreferencesQuery, SubmitComparisonsCommand,
    SubmitComparisonsHandler, UpsertProfileCommand, UpsertProfileHandler,
};

use super::dto::{
    ComparisonsResponse, PreferencesResponse, ProfileResponse, SubmitComparisonsRequest,
    UpsertProfileRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PreferenceHandlers {
    upsert_handler: Arc<UpsertProfileHandler>,
    get_handler: Arc<GetPreferencesHandler>,
    submit_handler: Arc<SubmitComparisonsHandler>,
}

impl PreferenceHandlers {
    pub fn new(
        upsert_handler: Arc<UpsertProfileHandler>,
        get_handler: Arc<GetPreferencesHandler>,
        submit_handler: Arc<SubmitComparisonsHandler>,
    ) -> Self {
        Self {
            upsert_handler,
            get_handler,
            submit_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// PUT /preference-profiles/me - Create or rename the caller's profile
pub async fn upsert_profile(
    State(handlers): State<PreferenceHandlers>,
    CallerIdentity(user_id): CallerIdentity,
    body: Option<Json<UpsertProfileRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let cmd = UpsertProfileCommand {
        user_id,
        name: req.name,
    };

    let result = handlers.upsert_handler.handle(cmd).await?;
    let status = if result.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(ProfileResponse::from(&result.profile))))
}

/// GET /preference-profiles/me - Profile with its stored comparisons
pub async fn get_preferences(
    State(handlers): State<PreferenceHandlers>,
    CallerIdentity(user_id): CallerIdentity,
) -> Result<Json<PreferencesResponse>, ApiError> {
    let view = handlers
        .get_handler
        .handle(GetPreferencesQuery { user_id })
        .await?;
    Ok(Json(view.into()))
}

/// POST /preference-profiles/me/pairwise-comparisons - Replace all comparisons
pub async fn submit_comparisons(
    State(handlers): State<PreferenceHandlers>,
    CallerIdentity(user_id): CallerIdentity,
    body: Result<Json<SubmitComparisonsRequest>, JsonRejection>,
) -> Result<Json<ComparisonsResponse>, ApiError> {
    let Json(req) = body?;
    let cmd = SubmitComparisonsCommand {
        user_id,
        comparisons: req.comparisons.into_iter().map(Into::into).collect(),
    };

    let result = handlers.submit_handler.handle(cmd).await?;
    Ok(Json(result.into()))
}
