//! Decision matrix construction from raw candidate attributes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::preference::{CriteriaSet, CriterionKey};

use super::{
    AreaScoreDictionary, CandidateProperty, CategoryScale, PropertyType, RecommendationError,
    NEUTRAL_AREA_SCORE,
};

/// Label recorded for blank property types.
pub const EMPTY_CATEGORY_LABEL: &str = "<empty>";

/// Candidate attribute a criterion column is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionAttribute {
    Price,
    Size,
    PropertyType,
    AreaScore,
}

impl CriterionAttribute {
    pub fn from_key(key: &CriterionKey) -> Option<Self> {
        match key.as_str() {
            "price" => Some(Self::Price),
            "size" => Some(Self::Size),
            "property_type" => Some(Self::PropertyType),
            "area_score" => Some(Self::AreaScore),
            _ => None,
        }
    }
}

/// Resolved numeric attributes of one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ResolvedAttributes {
    price: f64,
    size: f64,
    property_type: f64,
    area_score: f64,
}

impl ResolvedAttributes {
    fn get(&self, attribute: CriterionAttribute) -> f64 {
        match attribute {
            CriterionAttribute::Price => self.price,
            CriterionAttribute::Size => self.size,
            CriterionAttribute::PropertyType => self.property_type,
            CriterionAttribute::AreaScore => self.area_score,
        }
    }
}

/// One surviving candidate and its values in criteria order.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
    /// Index of the candidate in the input slice.
    pub candidate: usize,
    pub values: Vec<f64>,
}

/// Numeric matrix plus the bookkeeping gathered while building it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecisionMatrix {
    pub rows: Vec<MatrixRow>,
    /// Normalized labels that had no category mapping, sorted.
    pub unknown_categories: BTreeSet<String>,
    /// Candidates seen without an area score, excluded ones included.
    pub missing_score_count: usize,
    pub candidates_total: usize,
}

impl DecisionMatrix {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn values(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(|r| r.values.clone()).collect()
    }
}

/// Builds a [`DecisionMatrix`] for an ordered criteria set.
#[derive(Debug, Clone)]
pub struct DecisionMatrixBuilder<'a> {
    scale: &'a CategoryScale,
    areas: &'a AreaScoreDictionary,
    strict: bool,
}

impl<'a> DecisionMatrixBuilder<'a> {
    /// Creates a builder in strict category mode.
    pub fn new(scale: &'a CategoryScale, areas: &'a AreaScoreDictionary) -> Self {
        Self {
            scale,
            areas,
            strict: true,
        }
    }

    /// Sets whether unmapped categories fail the whole request.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Maps candidates to rows, preserving input order.
    ///
    /// # Edge Cases
    /// - Criterion key with no known attribute: Configuration error
    /// - Unmapped property type: candidate excluded and label recorded;
    ///   in strict mode the build fails listing every such label
    /// - Missing area or area score: neutral score, counted, candidate kept
    /// - Non-finite price or size: DegenerateInput
    pub fn build(
        &self,
        criteria: &CriteriaSet,
        candidates: &[CandidateProperty],
    ) -> Result<DecisionMatrix, RecommendationError> {
        let columns = criteria
            .iter()
            .map(|c| {
                CriterionAttribute::from_key(&c.key).ok_or_else(|| {
                    RecommendationError::Configuration(format!(
                        "criterion '{}' has no candidate attribute",
                        c.key
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut matrix = DecisionMatrix {
            candidates_total: candidates.len(),
            ..DecisionMatrix::default()
        };

        for (index, candidate) in candidates.iter().enumerate() {
            let category = PropertyType::parse(&candidate.property_type);
            if category.is_none() {
                matrix.unknown_categories.insert(category_label(&candidate.property_type));
            }

            let area_score = match self.areas.lookup(candidate.area_code.as_deref()) {
                Some(score) => score,
                None => {
                    matrix.missing_score_count += 1;
                    NEUTRAL_AREA_SCORE
                }
            };

            let Some(category) = category else {
                continue;
            };

            if !candidate.price.is_finite() || !candidate.size.is_finite() {
                return Err(RecommendationError::DegenerateInput(format!(
                    "candidate {} has non-finite price or size",
                    candidate.reference
                )));
            }

            let attributes = ResolvedAttributes {
                price: candidate.price,
                size: candidate.size,
                property_type: self.scale.value_of(category),
                area_score,
            };
            matrix.rows.push(MatrixRow {
                candidate: index,
                values: columns.iter().map(|a| attributes.get(*a)).collect(),
            });
        }

        if self.strict && !matrix.unknown_categories.is_empty() {
            return Err(RecommendationError::UnknownCategory {
                categories: matrix.unknown_categories.into_iter().collect(),
            });
        }

        Ok(matrix)
    }
}

fn category_label(raw: &str) -> String {
    let label = raw.trim().to_uppercase();
    if label.is_empty() {
        EMPTY_CATEGORY_LABEL.to_string()
    } else {
        label
    }
}
