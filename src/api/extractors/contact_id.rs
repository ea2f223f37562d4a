//! Contact id path extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::errors::AppError;

/// Contact id taken from the `:id` path segment.
///
/// A segment that is not a UUID cannot name a stored contact, so it rejects
/// with `AppError::NotFound` and the usual JSON error body. Handlers that
/// report absent contacts differently can extract `Result<ContactId, AppError>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for ContactId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("Rejected contact id: {}", e.body_text());
                AppError::NotFound
            })?;

        Ok(ContactId(id))
    }
}
