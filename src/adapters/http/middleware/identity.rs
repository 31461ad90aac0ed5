//! Caller identity extractor.
//!
//! Identity is established by the upstream gateway, which forwards the
//! authenticated user id in the `x-user-id` header. Handlers take
//! [`CallerIdentity`] to require it.
//!
//! ```ignore
//! async fn my_handler(CallerIdentity(user_id): CallerIdentity) -> String {
//!     format!("Hello, {}!", user_id)
//! }
//! ```

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::UserId;

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

        let value = raw
            .to_str()
            .map_err(|_| ApiError::unauthorized("Malformed caller identity"))?;

        UserId::new(value.trim())
            .map(CallerIdentity)
            .map_err(|_| ApiError::unauthorized("Authentication required"))
    }
}
