//! Row mapping and shared queries for the preference tables.

use sqlx::postgres::PgRow;
use sqlx::{PgExecutor, Row};

use crate::domain::foundation::{
    ComparisonId, CriterionId, DomainError, ErrorCode, ProfileId, Timestamp, UserId,
};
use crate::domain::preference::{
    CanonicalComparison, Criterion, CriterionKey, PreferenceProfile, StoredComparison,
};

/// Reads a column, wrapping decode failures as database errors.
pub(super) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

pub(super) async fn fetch_profile_by_user<'e, E: PgExecutor<'e>>(
    executor: E,
    user_id: &UserId,
) -> Result<Option<PreferenceProfile>, DomainError> {
    let row = sqlx::query(
        r#"
        SELECT id, user_id, name, created_at, updated_at
        FROM preference_profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id.as_str())
    .fetch_optional(executor)
    .await
    .map_err(|e| DomainError::database("Failed to fetch preference profile", e))?;

    row.as_ref().map(row_to_profile).transpose()
}

pub(super) async fn fetch_comparisons<'e, E: PgExecutor<'e>>(
    executor: E,
    profile_id: &ProfileId,
) -> Result<Vec<StoredComparison>, DomainError> {
    let rows = sqlx::query(
        r#"
        SELECT id, profile_id, criterion_a_id, criterion_b_id, value, created_at
        FROM pairwise_comparisons
        WHERE profile_id = $1
        ORDER BY criterion_a_id, criterion_b_id
        "#,
    )
    .bind(profile_id.as_uuid())
    .fetch_all(executor)
    .await
    .map_err(|e| DomainError::database("Failed to fetch pairwise comparisons", e))?;

    rows.iter().map(row_to_comparison).collect()
}

pub(super) async fn fetch_criteria<'e, E: PgExecutor<'e>>(
    executor: E,
) -> Result<Vec<Criterion>, DomainError> {
    let rows = sqlx::query("SELECT id, key, label, is_benefit, is_active FROM criteria ORDER BY id")
        .fetch_all(executor)
        .await
        .map_err(|e| DomainError::database("Failed to fetch criteria", e))?;

    rows.iter().map(row_to_criterion).collect()
}

fn row_to_profile(row: &PgRow) -> Result<PreferenceProfile, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let user_id: String = column(row, "user_id")?;
    let name: String = column(row, "name")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let updated_at: Option<chrono::DateTime<chrono::Utc>> = column(row, "updated_at")?;

    Ok(PreferenceProfile::reconstitute(
        ProfileId::from_uuid(id),
        UserId::new(user_id).map_err(|e| DomainError::database("Invalid user_id", e))?,
        name,
        Timestamp::from_datetime(created_at),
        updated_at.map(Timestamp::from_datetime),
    ))
}

fn row_to_comparison(row: &PgRow) -> Result<StoredComparison, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let profile_id: uuid::Uuid = column(row, "profile_id")?;
    let a: i32 = column(row, "criterion_a_id")?;
    let b: i32 = column(row, "criterion_b_id")?;
    let value: f64 = column(row, "value")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;

    Ok(StoredComparison {
        id: ComparisonId::from_uuid(id),
        profile_id: ProfileId::from_uuid(profile_id),
        comparison: CanonicalComparison::orient(CriterionId::new(a), CriterionId::new(b), value),
        created_at: Timestamp::from_datetime(created_at),
    })
}

fn row_to_criterion(row: &PgRow) -> Result<Criterion, DomainError> {
    let id: i32 = column(row, "id")?;
    let key: String = column(row, "key")?;
    let label: String = column(row, "label")?;
    let is_benefit: bool = column(row, "is_benefit")?;
    let is_active: bool = column(row, "is_active")?;

    let key = CriterionKey::new(key).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid criterion key: {}", e))
    })?;
    let criterion = Criterion::new(CriterionId::new(id), key, label, is_benefit);
    Ok(if is_active {
        criterion
    } else {
        criterion.deactivated()
    })
}
