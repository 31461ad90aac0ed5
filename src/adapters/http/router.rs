//! Application router: routes, shared state and cross-cutting layers.

use std::sync::Arc;

use axum::{extract::Request, routing::get, Json, Router};
use http::HeaderValue;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::application::{
    GetPreferencesHandler, GetRecommendationsHandler, SubmitComparisonsHandler,
    UpsertProfileHandler,
};
use crate::config::ServerConfig;
use crate::domain::recommendation::{RecommendationOrchestrator, RecommendationPolicy};
use crate::ports::{CriteriaReader, PreferenceRepository, RecommendationReader};

use super::preference::{preference_routes, PreferenceHandlers};
use super::recommendation::{recommendation_routes, RecommendationHandlers};

/// Ports and policy the HTTP surface is wired from.
#[derive(Clone)]
pub struct AppState {
    pub preferences: Arc<dyn PreferenceRepository>,
    pub criteria: Arc<dyn CriteriaReader>,
    pub recommendations: Arc<dyn RecommendationReader>,
    pub policy: RecommendationPolicy,
}

impl AppState {
    fn preference_handlers(&self) -> PreferenceHandlers {
        PreferenceHandlers::new(
            Arc::new(UpsertProfileHandler::new(self.preferences.clone())),
            Arc::new(GetPreferencesHandler::new(
                self.preferences.clone(),
                self.criteria.clone(),
            )),
            Arc::new(SubmitComparisonsHandler::new(
                self.preferences.clone(),
                self.criteria.clone(),
            )),
        )
    }

    fn recommendation_handlers(&self) -> RecommendationHandlers {
        let orchestrator = RecommendationOrchestrator::new(self.policy.clone());
        RecommendationHandlers::new(Arc::new(GetRecommendationsHandler::new(
            self.recommendations.clone(),
            orchestrator,
        )))
    }
}

/// GET /health - Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the full router with request ids, tracing, timeouts, CORS and compression.
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    Router::new()
        .route("/health", get(health))
        .merge(preference_routes(state.preference_handlers()))
        .merge(recommendation_routes(state.recommendation_handlers()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(trace)
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(server.request_timeout()))
                .layer(cors_layer(server))
                .layer(CompressionLayer::new()),
        )
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
