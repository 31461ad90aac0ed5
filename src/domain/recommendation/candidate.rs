//! Candidate properties handed to the recommendation engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a candidate, stable only within one response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateRef(String);

impl CandidateRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An eligible rental property with its raw attributes.
///
/// `property_type` is the label as stored; it is resolved against the
/// category scale when the decision matrix is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProperty {
    pub reference: CandidateRef,
    pub title: String,
    pub address: Option<String>,
    pub price: f64,
    pub size: f64,
    pub property_type: String,
    pub area_code: Option<String>,
}

impl CandidateProperty {
    pub fn new(
        reference: impl Into<String>,
        title: impl Into<String>,
        price: f64,
        size: f64,
        property_type: impl Into<String>,
    ) -> Self {
        Self {
            reference: CandidateRef::new(reference),
            title: title.into(),
            address: None,
            price,
            size,
            property_type: property_type.into(),
            area_code: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn in_area(mut self, area_code: impl Into<String>) -> Self {
        self.area_code = Some(area_code.into());
        self
    }
}
