use crate::domain::FetchRoute;
use crate::domain::errors::{LoadError, ParseFailure};
use crate::domain::ports::WishSource;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

// Thin reqwest client for the wish list, bound to one resolved route.
#[derive(Clone)]
pub struct HttpWishSource {
    http: Client,
    target: Url,
}

impl HttpWishSource {
    // `timeout` of None keeps the platform default.
    pub fn new(
        route: &FetchRoute,
        upstream: &Url,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            target: route.target_url(upstream),
        })
    }

    pub fn target(&self) -> &Url {
        &self.target
    }
}

#[async_trait]
impl WishSource for HttpWishSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        tracing::debug!(url = %self.target, "requesting wishes.");
        let res = self
            .http
            .get(self.target.clone())
            .send()
            .await
            .map_err(|err| LoadError::Network(err.to_string()))?;
        let status = res.status();
        tracing::debug!(url = %self.target, %status, "wish source responded.");

        if !status.is_success() {
            return Err(LoadError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        // A body cut off mid-stream is a transport failure.
        let body = res
            .bytes()
            .await
            .map_err(|err| LoadError::Network(err.to_string()))?;

        // Strict decode: corrupt bytes must fail parsing, not become U+FFFD.
        String::from_utf8(body.to_vec())
            .map_err(|err| ParseFailure::InvalidJson(err.to_string()).into())
    }

    fn describe(&self) -> String {
        self.target.to_string()
    }
}
