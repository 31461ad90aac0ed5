//! Decision criteria and the ordered active set used by one computation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::foundation::{CriterionId, ValidationError};

/// Maximum length of a criterion key.
pub const MAX_CRITERION_KEY_LEN: usize = 50;

/// Stable machine key of a criterion (e.g. `price`, `area_score`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriterionKey(String);

impl CriterionKey {
    /// Creates a key, rejecting blank or overlong values.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::empty_field("criterion_key"));
        }
        if key.len() > MAX_CRITERION_KEY_LEN {
            return Err(ValidationError::out_of_range(
                "criterion_key",
                1,
                MAX_CRITERION_KEY_LEN as i32,
                key.len() as i32,
            ));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CriterionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A decision criterion as configured in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub key: CriterionKey,
    pub label: String,
    /// Higher values preferred when true, lower values when false.
    pub is_benefit: bool,
    pub is_active: bool,
}

impl Criterion {
    pub fn new(
        id: CriterionId,
        key: CriterionKey,
        label: impl Into<String>,
        is_benefit: bool,
    ) -> Self {
        Self {
            id,
            key,
            label: label.into(),
            is_benefit,
            is_active: true,
        }
    }

    /// Marks the criterion inactive.
    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Unordered pair of criterion keys, stored with the keys sorted.
///
/// Serializes as a two-element array, e.g. `["price", "size"]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CriterionPair(CriterionKey, CriterionKey);

impl CriterionPair {
    pub fn new(a: &CriterionKey, b: &CriterionKey) -> Self {
        if a <= b {
            Self(a.clone(), b.clone())
        } else {
            Self(b.clone(), a.clone())
        }
    }

    pub fn first(&self) -> &CriterionKey {
        &self.0
    }

    pub fn second(&self) -> &CriterionKey {
        &self.1
    }
}

impl fmt::Display for CriterionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Ordered set of active criteria observed by one computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    /// Keeps the active criteria, preserving their order.
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self {
            criteria: criteria.into_iter().filter(|c| c.is_active).collect(),
        }
    }

    /// Arranges the active criteria in the given key order.
    ///
    /// Returns the keys of `order` that have no active criterion when the
    /// set cannot be fully resolved. Active criteria not named in `order`
    /// are left out.
    pub fn ordered_by(criteria: &[Criterion], order: &[CriterionKey]) -> Result<Self, Vec<CriterionKey>> {
        let mut ordered = Vec::with_capacity(order.len());
        let mut missing = Vec::new();

        for key in order {
            match criteria.iter().find(|c| c.is_active && &c.key == key) {
                Some(criterion) => ordered.push(criterion.clone()),
                None => missing.push(key.clone()),
            }
        }

        if missing.is_empty() {
            Ok(Self { criteria: ordered })
        } else {
            Err(missing)
        }
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    pub fn as_slice(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Looks up an active criterion by its raw key.
    pub fn find_by_key(&self, key: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.key.as_str() == key)
    }

    pub fn find_by_id(&self, id: CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    /// Matrix index of the criterion with the given id.
    pub fn position_of(&self, id: CriterionId) -> Option<usize> {
        self.criteria.iter().position(|c| c.id == id)
    }

    pub fn keys(&self) -> Vec<CriterionKey> {
        self.criteria.iter().map(|c| c.key.clone()).collect()
    }

    pub fn is_benefit(&self) -> Vec<bool> {
        self.criteria.iter().map(|c| c.is_benefit).collect()
    }

    /// Every unordered pair of distinct criteria, C(n, 2) in total.
    pub fn expected_pairs(&self) -> BTreeSet<CriterionPair> {
        let mut pairs = BTreeSet::new();
        for (i, a) in self.criteria.iter().enumerate() {
            for b in &self.criteria[i + 1..] {
                pairs.insert(CriterionPair::new(&a.key, &b.key));
            }
        }
        pairs
    }
}
