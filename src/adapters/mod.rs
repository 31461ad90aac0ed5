//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST surface
//! - `postgres` - PostgreSQL-backed ports (sqlx)
//! - `storage` - In-memory store for tests and local runs

pub mod http;
pub mod postgres;
pub mod storage;

pub use storage::InMemoryRentalStore;
