//! PostgreSQL implementation of CriteriaReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::domain::preference::Criterion;
use crate::ports::CriteriaReader;

use super::rows;

/// Reads the criteria catalog from the `criteria` table.
#[derive(Clone)]
pub struct PostgresCriteriaReader {
    pool: PgPool,
}

impl PostgresCriteriaReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CriteriaReader for PostgresCriteriaReader {
    async fn list_criteria(&self) -> Result<Vec<Criterion>, DomainError> {
        rows::fetch_criteria(&self.pool).await
    }
}
