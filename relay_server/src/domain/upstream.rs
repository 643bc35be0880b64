use async_trait::async_trait;
use axum::body::Bytes;
use thiserror::Error;

// Failure modes of the single outbound call to the wish upstream.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream transport error: {0}")]
    Transport(String),
    #[error("upstream responded with status {status}")]
    Status { status: u16 },
    #[error("failed to read upstream body: {0}")]
    Body(String),
}

// The relay use case depends on this trait, not the concrete reqwest client.
// Tests swap in a scripted feed.
#[async_trait]
pub trait UpstreamFeed: Send + Sync {
    // One GET against the fixed upstream URL; returns the raw success body.
    async fn fetch(&self) -> Result<Bytes, UpstreamError>;
}
