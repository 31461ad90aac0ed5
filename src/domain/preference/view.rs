//! Read model of stored comparisons with criteria resolved to keys and labels.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ComparisonId, CriterionId};

use super::{Criterion, StoredComparison};

/// A criterion reference as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionRef {
    pub id: i32,
    pub key: String,
    pub label: String,
}

impl CriterionRef {
    fn resolve(id: CriterionId, criteria: &[Criterion]) -> Self {
        match criteria.iter().find(|c| c.id == id) {
            Some(c) => Self {
                id: id.value(),
                key: c.key.to_string(),
                label: c.label.clone(),
            },
            // Criterion removed from the catalog after the comparison was stored.
            None => Self {
                id: id.value(),
                key: format!("criterion-{}", id),
                label: String::new(),
            },
        }
    }
}

/// A canonical comparison in display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonView {
    pub id: ComparisonId,
    pub criterion_a: CriterionRef,
    pub criterion_b: CriterionRef,
    pub value: f64,
}

impl ComparisonView {
    pub fn resolve(stored: &StoredComparison, criteria: &[Criterion]) -> Self {
        Self {
            id: stored.id,
            criterion_a: CriterionRef::resolve(stored.comparison.criterion_a(), criteria),
            criterion_b: CriterionRef::resolve(stored.comparison.criterion_b(), criteria),
            value: stored.comparison.value(),
        }
    }

    pub fn resolve_all(stored: &[StoredComparison], criteria: &[Criterion]) -> Vec<Self> {
        stored.iter().map(|s| Self::resolve(s, criteria)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ProfileId;
    use crate::domain::preference::criterion::fixtures::rental_criteria;
    use crate::domain::preference::CanonicalComparison;

    #[test]
    fn resolves_keys_and_labels() {
        let stored = StoredComparison::new(
            ProfileId::new(),
            CanonicalComparison::orient(CriterionId::new(4), CriterionId::new(1), 2.0),
        );
        let view = ComparisonView::resolve(&stored, &rental_criteria());

        assert_eq!(view.criterion_a.key, "price");
        assert_eq!(view.criterion_b.key, "area_score");
        assert_eq!(view.criterion_b.label, "area score");
        assert_eq!(view.value, 0.5);
    }

    #[test]
    fn unknown_criterion_falls_back_to_id() {
        let stored = StoredComparison::new(
            ProfileId::new(),
            CanonicalComparison::orient(CriterionId::new(1), CriterionId::new(9), 3.0),
        );
        let view = ComparisonView::resolve(&stored, &rental_criteria());
        assert_eq!(view.criterion_b.key, "criterion-9");
        assert_eq!(view.criterion_b.id, 9);
    }
}
