//! PreferenceProfile aggregate - one per user, owner of the pairwise comparisons.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, Timestamp, UserId, ValidationError};

/// Name given to profiles created without an explicit name.
pub const DEFAULT_PROFILE_NAME: &str = "My preferences";

/// Maximum profile name length, in characters.
pub const MAX_PROFILE_NAME_LEN: usize = 100;

/// A user's preference profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    id: ProfileId,
    user_id: UserId,
    name: String,
    created_at: Timestamp,
    updated_at: Option<Timestamp>,
}

impl PreferenceProfile {
    /// Creates a new profile for the user, falling back to the default name.
    pub fn new(user_id: UserId, name: Option<String>) -> Result<Self, ValidationError> {
        let name = match name {
            Some(name) => validate_name(&name)?,
            None => DEFAULT_PROFILE_NAME.to_string(),
        };

        Ok(Self {
            id: ProfileId::new(),
            user_id,
            name,
            created_at: Timestamp::now(),
            updated_at: None,
        })
    }

    /// Rebuilds a profile from persisted state.
    pub fn reconstitute(
        id: ProfileId,
        user_id: UserId,
        name: String,
        created_at: Timestamp,
        updated_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            created_at,
            updated_at,
        }
    }

    /// Changes the display name.
    pub fn rename(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validate_name(name)?;
        self.updated_at = Some(Timestamp::now());
        Ok(())
    }

    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> Option<&Timestamp> {
        self.updated_at.as_ref()
    }
}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    let len = trimmed.chars().count();
    if len > MAX_PROFILE_NAME_LEN {
        return Err(ValidationError::out_of_range(
            "name",
            1,
            MAX_PROFILE_NAME_LEN as i32,
            len as i32,
        ));
    }
    Ok(trimmed.to_string())
}
