//! RentPro - Rental property recommendations
//!
//! Tenants state how much they care about each criterion through pairwise
//! judgments. AHP turns the judgments into weights (rejecting inconsistent
//! sets) and TOPSIS ranks the available properties against those weights.
//!
//! Layout follows a hexagonal architecture: `domain` holds the pure
//! computation, `ports` the storage contracts, `adapters` the PostgreSQL,
//! in-memory and HTTP implementations, and `application` the use-case
//! handlers wiring them together.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
