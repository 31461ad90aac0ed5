//! HTTP routes for preference profile endpoints.

use axum::{
    routing::{post, put},
    Router,
};

use super::handlers::{get_preferences, submit_comparisons, upsert_profile, PreferenceHandlers};

/// Creates the preference profile router.
pub fn preference_routes(handlers: PreferenceHandlers) -> Router {
    Router::new()
        .route("/preference-profiles/me", put(upsert_profile).get(get_preferences))
        .route("/preference-profiles/me/pairwise-comparisons", post(submit_comparisons))
        .with_state(handlers)
}
