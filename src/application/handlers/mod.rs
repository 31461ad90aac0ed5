//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod preference;
pub mod recommendation;

#[cfg(test)]
pub(crate) mod test_support;

pub use preference::{
    GetPreferencesHandler, GetPreferencesQuery, PreferencesView, SubmitComparisonsCommand,
    SubmitComparisonsHandler, SubmitComparisonsResult, UpsertProfileCommand, UpsertProfileHandler,
    UpsertProfileResult,
};
pub use recommendation::{GetRecommendationsHandler, GetRecommendationsQuery};
