//! Error responses for the HTTP API.
//!
//! Every use-case error is mapped to a status code and a JSON body of the
//! form `{ "code", "message", "details"? }`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::domain::foundation::ErrorCode;
use crate::domain::preference::{ComparisonValidationError, PreferenceError};
use crate::domain::recommendation::RecommendationError;

/// JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// An error ready to be sent to the client.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(ErrorCode::Unauthorized, message),
        )
    }

    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(ErrorCode::InternalError, "An unexpected error occurred"),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            rejection.status(),
            ErrorResponse::new(ErrorCode::ValidationFailed, rejection.body_text()),
        )
    }
}

fn comparison_details(err: &ComparisonValidationError) -> serde_json::Value {
    match err {
        ComparisonValidationError::UnknownCriterion { key }
        | ComparisonValidationError::SelfComparison { key } => json!({ "key": key }),
        ComparisonValidationError::OutOfRangeValue {
            criterion_a_key,
            criterion_b_key,
            value,
        } => json!({
            "criterion_a_key": criterion_a_key,
            "criterion_b_key": criterion_b_key,
            "value": value,
        }),
        ComparisonValidationError::IncompletePairs {
            expected_pair_count,
            provided_pair_count,
            missing_pairs,
            extra_pairs,
        } => json!({
            "expected_pair_count": expected_pair_count,
            "provided_pair_count": provided_pair_count,
            "missing_pairs": missing_pairs,
            "extra_pairs": extra_pairs,
        }),
        ComparisonValidationError::DuplicateComparison { pair } => json!({ "pair": pair }),
    }
}

impl From<PreferenceError> for ApiError {
    fn from(err: PreferenceError) -> Self {
        let body = ErrorResponse::new(err.code(), err.to_string());
        match &err {
            PreferenceError::ProfileNotFound => Self::new(StatusCode::NOT_FOUND, body),
            PreferenceError::NotEnoughCriteria { count } => Self::new(
                StatusCode::CONFLICT,
                body.with_details(json!({ "active_criteria": count })),
            ),
            PreferenceError::InvalidProfile(_) => Self::new(StatusCode::UNPROCESSABLE_ENTITY, body),
            PreferenceError::InvalidComparisons(inner) => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                body.with_details(comparison_details(inner)),
            ),
            PreferenceError::Infrastructure(_) => Self::internal(),
        }
    }
}

impl From<RecommendationError> for ApiError {
    fn from(err: RecommendationError) -> Self {
        let body = ErrorResponse::new(err.code(), err.to_string());
        match &err {
            RecommendationError::ProfileNotFound => Self::new(StatusCode::NOT_FOUND, body),
            RecommendationError::ComparisonsNotSet => Self::new(StatusCode::CONFLICT, body),
            RecommendationError::InconsistentJudgments { cr, threshold } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                body.with_details(json!({ "cr": cr, "threshold": threshold })),
            ),
            RecommendationError::UnknownCategory { categories } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                body.with_details(json!({ "unknown_types": categories })),
            ),
            RecommendationError::MissingCriteriaConfiguration { missing } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                body.with_details(json!({ "missing": missing })),
            ),
            RecommendationError::Configuration(_) | RecommendationError::DegenerateInput(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            RecommendationError::Infrastructure(_) => Self::internal(),
        }
    }
}
