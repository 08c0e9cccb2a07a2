//! Typed views of what the feeds service returns
//!
//! The loaders pass bodies through untyped. These types are for consumers that
//! want to decode them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A subscribed feed, as listed by `GET /feeds`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub id: i32,
    pub url: String,
    pub name: String,
}

/// One item of a feed, as listed by `GET /feeds/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub id: i32,
    pub title: Option<String>,
    pub link: Option<String>,
    pub pub_date: Option<NaiveDateTime>,
    pub guid: Option<String>,
    pub feed_id: Option<i32>,
}
