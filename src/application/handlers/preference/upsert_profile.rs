//! UpsertProfileHandler - Creates the caller's profile or renames it.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::preference::{PreferenceError, PreferenceProfile};
use crate::ports::PreferenceRepository;

/// Command to create or rename the caller's preference profile.
#[derive(Debug, Clone)]
pub struct UpsertProfileCommand {
    pub user_id: UserId,
    pub name: Option<String>,
}

/// Result of a successful upsert.
#[derive(Debug, Clone)]
pub struct UpsertProfileResult {
    pub profile: PreferenceProfile,
    pub created: bool,
}

/// Handler for profile upserts.
pub struct UpsertProfileHandler {
    repository: Arc<dyn PreferenceRepository>,
}

impl UpsertProfileHandler {
    pub fn new(repository: Arc<dyn PreferenceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpsertProfileCommand,
    ) -> Result<UpsertProfileResult, PreferenceError> {
        // 1. Existing profile: rename when a name is given, otherwise leave as is
        if let Some(mut profile) = self.repository.find_profile_by_user(&cmd.user_id).await? {
            if let Some(name) = cmd.name.as_deref() {
                profile.rename(name)?;
                self.repository.save_profile(&profile).await?;
                info!(user_id = %cmd.user_id, profile_id = %profile.id(), "Preference profile renamed");
            }
            return Ok(UpsertProfileResult {
                profile,
                created: false,
            });
        }

        // 2. First write creates the profile
        let profile = PreferenceProfile::new(cmd.user_id.clone(), cmd.name)?;
        self.repository.save_profile(&profile).await?;
        info!(user_id = %cmd.user_id, profile_id = %profile.id(), "Preference profile created");

        Ok(UpsertProfileResult {
            profile,
            created: true,
        })
    }
}
