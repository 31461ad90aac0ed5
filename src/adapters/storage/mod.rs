//! Storage adapters.
//!
//! - `InMemoryRentalStore` - In-memory implementation of every port

mod in_memory_rental_store;

pub use in_memory_rental_store::InMemoryRentalStore;
