//! Criteria reader port - the configured decision criteria.

use crate::domain::foundation::DomainError;
use crate::domain::preference::Criterion;
use async_trait::async_trait;

/// Read-only access to the criteria catalog.
#[async_trait]
pub trait CriteriaReader: Send + Sync {
    /// Every configured criterion, active or not, ordered by id.
    async fn list_criteria(&self) -> Result<Vec<Criterion>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn CriteriaReader) {}
    }
}
