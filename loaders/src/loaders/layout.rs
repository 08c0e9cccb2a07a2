//! Feed list for the top-level layout

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::FeedsClient;
use crate::models::Feed;
use crate::route::{Load, RouteParams};

/// View data for the layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutData {
    pub posts: Value,
}

impl LayoutData {
    /// Decode `posts` as the service's feed list
    pub fn feeds(&self) -> crate::Result<Vec<Feed>> {
        Ok(Vec::<Feed>::deserialize(&self.posts)?)
    }
}

/// Loads `GET /feeds` once per layout render
#[derive(Clone)]
pub struct LayoutLoader {
    client: FeedsClient,
}

impl LayoutLoader {
    pub fn new(client: FeedsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Load for LayoutLoader {
    type Output = LayoutData;

    const PRERENDER: bool = true;

    /// Route parameters are ignored: the layout always shows the full list.
    async fn load(&self, _params: &RouteParams) -> crate::Result<LayoutData> {
        let posts = self.client.get_json(&self.client.feeds_url()).await?;
        Ok(LayoutData { posts })
    }
}
