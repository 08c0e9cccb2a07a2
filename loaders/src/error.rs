//! Error type for the loaders
//!
//! Nothing here is retried or recovered from. Every variant reaches the caller as-is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing route parameter: {0}")]
    MissingParam(&'static str),

    #[error("Deferred load did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("HTTP client error: {0}")]
    Client(String),
}
