use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Origin of the feeds service, e.g. `http://localhost:3000`
    pub base_url: String,
}

impl LoaderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load from `FEEDS_API_URL`, reading a `.env` file first if present
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            base_url: env::var("FEEDS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
