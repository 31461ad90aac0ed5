//! Closed property-type enumeration and its ordinal scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Property categories the engine knows how to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Studio,
    Apartment,
    Maisonette,
    DetachedHouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Studio,
        PropertyType::Apartment,
        PropertyType::Maisonette,
        PropertyType::DetachedHouse,
    ];

    /// Resolves a stored label. Surrounding whitespace and case are ignored.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "STUDIO" => Some(Self::Studio),
            "APARTMENT" => Some(Self::Apartment),
            "MAISONETTE" => Some(Self::Maisonette),
            "DETACHED_HOUSE" => Some(Self::DetachedHouse),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Studio => "STUDIO",
            Self::Apartment => "APARTMENT",
            Self::Maisonette => "MAISONETTE",
            Self::DetachedHouse => "DETACHED_HOUSE",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordinal value assigned to each property type (benefit direction).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryScale {
    pub studio: f64,
    pub apartment: f64,
    pub maisonette: f64,
    pub detached_house: f64,
}

impl CategoryScale {
    pub fn value_of(&self, property_type: PropertyType) -> f64 {
        match property_type {
            PropertyType::Studio => self.studio,
            PropertyType::Apartment => self.apartment,
            PropertyType::Maisonette => self.maisonette,
            PropertyType::DetachedHouse => self.detached_house,
        }
    }

    /// True when every ordinal is positive and they increase with the
    /// declaration order of [`PropertyType`].
    pub fn is_strictly_increasing(&self) -> bool {
        let values = PropertyType::ALL.map(|t| self.value_of(t));
        values[0] > 0.0 && values.windows(2).all(|w| w[0] < w[1])
    }
}

impl Default for CategoryScale {
    fn default() -> Self {
        Self {
            studio: 1.0,
            apartment: 2.0,
            maisonette: 3.0,
            detached_house: 4.0,
        }
    }
}
