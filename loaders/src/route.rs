//! Contract between the loaders and the rendering layer

use std::collections::HashMap;

use async_trait::async_trait;

/// Values captured from the dynamic segments of the current route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A loader the rendering layer calls before (or while) a route renders
#[async_trait]
pub trait Load: Send + Sync {
    /// Data handed to the view
    type Output: Send;

    /// Whether the output may be computed once at build time instead of per request
    const PRERENDER: bool = false;

    async fn load(&self, params: &RouteParams) -> crate::Result<Self::Output>;
}
