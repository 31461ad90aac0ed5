//! HTTP adapters - REST API implementations.
//!
//! Each use-case area has its own HTTP adapter; `router` wires them together.

pub mod error;
pub mod middleware;
pub mod preference;
pub mod recommendation;
mod router;

pub use error::{ApiError, ErrorResponse};
pub use router::{build_router, AppState};
