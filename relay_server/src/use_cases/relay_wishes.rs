use axum::body::Bytes;
use serde::de::IgnoredAny;
use thiserror::Error;

use crate::domain::{UpstreamError, UpstreamFeed};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("upstream body is not valid JSON: {0}")]
    MalformedBody(String),
}

// Relays the upstream wish list once. No retry, no caching.
pub struct RelayWishesUseCase<'a> {
    pub feed: &'a dyn UpstreamFeed,
}

impl RelayWishesUseCase<'_> {
    pub async fn execute(&self) -> Result<Bytes, RelayError> {
        let body = self.feed.fetch().await?;

        // Validate without re-serializing so the caller gets the upstream bytes verbatim.
        serde_json::from_slice::<IgnoredAny>(&body)
            .map_err(|err| RelayError::MalformedBody(err.to_string()))?;

        Ok(body)
    }
}
