//! PostgreSQL implementation of RecommendationReader.
//!
//! All reads run in one `REPEATABLE READ, READ ONLY` transaction so a
//! concurrent comparison replace is seen entirely or not at all.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::recommendation::{Area, CandidateProperty, CandidateRef, RecommendationSnapshot};
use crate::ports::RecommendationReader;

use super::rows::{self, column};

/// Only listings in this status are recommended.
const ELIGIBLE_STATUS: &str = "AVAILABLE";

/// Snapshot reader over the preference and catalog tables.
#[derive(Clone)]
pub struct PostgresRecommendationReader {
    pool: PgPool,
}

impl PostgresRecommendationReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecommendationReader for PostgresRecommendationReader {
    async fn load_snapshot(&self, user_id: &UserId) -> Result<RecommendationSnapshot, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to set snapshot isolation", e))?;

        let profile = rows::fetch_profile_by_user(&mut *tx, user_id).await?;
        let comparisons = match &profile {
            Some(p) => rows::fetch_comparisons(&mut *tx, p.id())
                .await?
                .into_iter()
                .map(|s| s.comparison)
                .collect(),
            None => Vec::new(),
        };
        let criteria = rows::fetch_criteria(&mut *tx).await?;

        let candidates = sqlx::query(
            r#"
            SELECT p.id, p.title, p.address, p.property_type, p.size, p.price,
                   a.code AS area_code
            FROM properties p
            LEFT JOIN areas a ON a.id = p.area_id
            WHERE p.status = $1
            ORDER BY p.created_at, p.id
            "#,
        )
        .bind(ELIGIBLE_STATUS)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to fetch available properties", e))?
        .iter()
        .map(row_to_candidate)
        .collect::<Result<Vec<_>, _>>()?;

        let areas = sqlx::query("SELECT code, name, area_score FROM areas")
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to fetch areas", e))?
            .iter()
            .map(row_to_area)
            .collect::<Result<Vec<_>, _>>()?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to close snapshot", e))?;

        Ok(RecommendationSnapshot {
            profile,
            comparisons,
            criteria,
            candidates,
            areas,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_candidate(row: &PgRow) -> Result<CandidateProperty, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    Ok(CandidateProperty {
        reference: CandidateRef::new(id.to_string()),
        title: column(row, "title")?,
        address: column(row, "address")?,
        price: column(row, "price")?,
        size: column(row, "size")?,
        property_type: column(row, "property_type")?,
        area_code: column(row, "area_code")?,
    })
}

fn row_to_area(row: &PgRow) -> Result<Area, DomainError> {
    Ok(Area {
        code: column(row, "code")?,
        name: column(row, "name")?,
        score: column(row, "area_score")?,
    })
}
