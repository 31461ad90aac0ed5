//! HTTP adapter for preference profile endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ComparisonsResponse, PairwiseComparisonRequest, PreferencesResponse, ProfileResponse,
    SubmitComparisonsRequest, UpsertProfileRequest,
};
pub use handlers::PreferenceHandlers;
pub use routes::preference_routes;
