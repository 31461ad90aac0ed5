//! Preference profile and pairwise comparison handlers.

mod get_preferences;
mod submit_comparisons;
mod upsert_profile;

pub use get_preferences::{GetPreferencesHandler, GetPreferencesQuery, PreferencesView};
pub use submit_comparisons::{
    SubmitComparisonsCommand, SubmitComparisonsHandler, SubmitComparisonsResult,
};
pub use upsert_profile::{UpsertProfileCommand, UpsertProfileHandler, UpsertProfileResult};
