//! Data loaders for the feed reader's routing layer
//!
//! Two loaders feed the rendering layer:
//! - [`LayoutLoader`] fetches the feed list once per layout render and hands it back as `posts`
//! - [`PageLoader`] starts fetching one feed's items and hands back a [`Deferred`] as `items`
//!
//! Both talk to the feeds service through [`FeedsClient`], configured by [`LoaderConfig`].

mod client;
mod config;
mod deferred;
mod error;
mod loaders;
pub mod models;
mod route;


pub use client::FeedsClient;
pub use config::LoaderConfig;
pub use deferred::Deferred;
pub use error::LoadError;
pub use loaders::{LayoutData, LayoutLoader, PageData, PageLoader, ResolvedPageData};
pub use models::{Feed, FeedEntry};
pub use route::{Load, RouteParams};

pub type Result<T> = std::result::Result<T, LoadError>;
