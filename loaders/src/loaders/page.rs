//! Items of a single feed for the detail page

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::FeedsClient;
use crate::deferred::Deferred;
use crate::error::LoadError;
use crate::models::FeedEntry;
use crate::route::{Load, RouteParams};

/// View data for the detail page. `items` is still in flight.
#[derive(Debug)]
pub struct PageData {
    pub items: Deferred<Value>,
}

impl PageData {
    /// Wait for `items`
    pub async fn resolve(self) -> crate::Result<ResolvedPageData> {
        Ok(ResolvedPageData {
            items: self.items.resolve().await?,
        })
    }
}

/// [`PageData`] after its items have arrived
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPageData {
    pub items: Value,
}

impl ResolvedPageData {
    /// Decode `items` as the service's entry list
    pub fn entries(&self) -> crate::Result<Vec<FeedEntry>> {
        Ok(Vec::<FeedEntry>::deserialize(&self.items)?)
    }
}

/// Loads `GET /feeds/{id}` for the `id` route parameter
#[derive(Clone)]
pub struct PageLoader {
    client: FeedsClient,
}

impl PageLoader {
    pub fn new(client: FeedsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Load for PageLoader {
    type Output = PageData;

    /// Starts the request and returns without waiting for it.
    ///
    /// The request runs as a tokio task, so this must be polled inside a tokio
    /// runtime; other executors make it panic.
    async fn load(&self, params: &RouteParams) -> crate::Result<PageData> {
        let id = params.get("id").ok_or(LoadError::MissingParam("id"))?;
        let url = self.client.feed_url(id);
        tracing::debug!(%url, "Loading feed items");

        let client = self.client.clone();
        let items = Deferred::spawn(async move { client.get_json(&url).await });

        Ok(PageData { items })
    }
}
