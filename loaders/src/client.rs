//! HTTP client for the feeds service

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::LoaderConfig;
use crate::error::LoadError;

/// HTTP client for the feeds service
///
/// Cheap to clone: clones share the underlying connection pool.
#[derive(Clone)]
pub struct FeedsClient {
    http: Client,
    base_url: String,
}

impl FeedsClient {
    /// Create a new client from loader configuration
    pub fn new(config: &LoaderConfig) -> crate::Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| LoadError::Client(e.to_string()))?;

        Ok(Self::with_client(http, &config.base_url))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the feed list
    pub fn feeds_url(&self) -> String {
        format!("{}/feeds", self.base_url)
    }

    /// URL of one feed's items. The identifier is appended as-is, without escaping.
    pub fn feed_url(&self, id: &str) -> String {
        format!("{}/feeds/{}", self.base_url, id)
    }

    /// GET `url` and parse the body as JSON.
    ///
    /// The status code is not inspected: whatever body comes back is parsed.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> crate::Result<T> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        tracing::debug!(url, %status, "Feeds service responded");

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
