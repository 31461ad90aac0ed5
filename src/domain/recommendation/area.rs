//! Area score dictionary used for the `area_score` criterion.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Score used when a candidate has no area or its area has no score.
pub const NEUTRAL_AREA_SCORE: f64 = 0.0;

/// A region with its externally curated desirability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub code: String,
    pub name: String,
    pub score: Option<f64>,
}

impl Area {
    pub fn new(code: impl Into<String>, name: impl Into<String>, score: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            score: Some(score),
        }
    }
}

/// Lookup of area scores by region code. Codes compare case-insensitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaScoreDictionary {
    scores: HashMap<String, f64>,
}

impl AreaScoreDictionary {
    /// Builds the dictionary from areas, skipping those without a usable score.
    pub fn from_areas<'a>(areas: impl IntoIterator<Item = &'a Area>) -> Self {
        let scores = areas
            .into_iter()
            .filter_map(|area| {
                area.score
                    .filter(|s| s.is_finite())
                    .map(|s| (normalize(&area.code), s))
            })
            .collect();
        Self { scores }
    }

    /// Score for the region, or `None` when the code is absent or unscored.
    pub fn lookup(&self, code: Option<&str>) -> Option<f64> {
        code.and_then(|c| self.scores.get(&normalize(c)).copied())
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
