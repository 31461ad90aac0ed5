//! PostgreSQL implementation of PreferenceRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, UserId};
use crate::domain::preference::{CanonicalComparison, PreferenceProfile, StoredComparison};
use crate::ports::PreferenceRepository;

use super::rows;

/// PostgreSQL implementation of PreferenceRepository.
#[derive(Clone)]
pub struct PostgresPreferenceRepository {
    pool: PgPool,
}

impl PostgresPreferenceRepository {
    /// Creates a new PostgresPreferenceRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceRepository for PostgresPreferenceRepository {
    async fn find_profile_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<PreferenceProfile>, DomainError> {
        rows::fetch_profile_by_user(&self.pool, user_id).await
    }

    async fn save_profile(&self, profile: &PreferenceProfile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO preference_profiles (id, user_id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(profile.id().as_uuid())
        .bind(profile.user_id().as_str())
        .bind(profile.name())
        .bind(profile.created_at().as_datetime())
        .bind(profile.updated_at().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save preference profile", e))?;

        Ok(())
    }

    async fn list_comparisons(
        &self,
        profile_id: &ProfileId,
    ) -> Result<Vec<StoredComparison>, DomainError> {
        rows::fetch_comparisons(&self.pool, profile_id).await
    }

    async fn replace_comparisons(
        &self,
        profile_id: &ProfileId,
        comparisons: &[CanonicalComparison],
    ) -> Result<Vec<StoredComparison>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        // Row lock serializes concurrent replaces for the same profile.
        let locked = sqlx::query("SELECT id FROM preference_profiles WHERE id = $1 FOR UPDATE")
            .bind(profile_id.as_uuid())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to lock preference profile", e))?;
        if locked.is_none() {
            return Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Preference profile not found: {}", profile_id),
            ));
        }

        sqlx::query("DELETE FROM pairwise_comparisons WHERE profile_id = $1")
            .bind(profile_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete pairwise comparisons", e))?;

        let mut stored = Vec::with_capacity(comparisons.len());
        for comparison in comparisons {
            let record = StoredComparison::new(*profile_id, *comparison);
            sqlx::query(
                r#"
                INSERT INTO pairwise_comparisons (
                    id, profile_id, criterion_a_id, criterion_b_id, value, created_at
                ) VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(record.id.as_uuid())
            .bind(profile_id.as_uuid())
            .bind(comparison.criterion_a().value())
            .bind(comparison.criterion_b().value())
            .bind(comparison.value())
            .bind(record.created_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to insert pairwise comparison", e))?;
            stored.push(record);
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(stored)
    }
}
