use crate::domain::{UpstreamError, UpstreamFeed};
use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::Client;
use std::time::Duration;
use url::Url;

// Thin wrapper around reqwest for the form-backed wish upstream.
#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    pub url: Url,
}

impl UpstreamClient {
    // `timeout` of None keeps the platform default (no explicit limit).
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            url,
        })
    }
}

#[async_trait]
impl UpstreamFeed for UpstreamClient {
    async fn fetch(&self) -> Result<Bytes, UpstreamError> {
        let res = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;
        let status = res.status();
        tracing::debug!(url = %self.url, %status, "upstream responded.");

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        res.bytes()
            .await
            .map_err(|err| UpstreamError::Body(err.to_string()))
    }
}
