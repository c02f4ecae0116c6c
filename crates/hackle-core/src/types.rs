//! Core types for hackle-core.
//!
//! This module defines the data structures shared across all layers: the
//! [`Hit`] search result record, the [`SearchPage`] response envelope, the
//! per-key [`CacheEntry`], and the [`SortKey`] discriminant.

use serde::Deserialize;

/// One story returned by the search API.
///
/// Deserialised straight from an Algolia response hit. Fields beyond the six
/// listed here are ignored; all six must be present for the hit to parse.
/// `object_id` is unique within a response page but uniqueness across merged
/// pages is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hit {
    /// Stable story identifier assigned by the API.
    #[serde(rename = "objectID")]
    pub object_id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub num_comments: u32,
    pub points: u32,
}

/// One page of search results as returned by the API.
///
/// The response top level carries more fields (`nbHits`, `query`,
/// `processingTimeMS`, …); only `hits` and `page` matter here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchPage {
    pub hits: Vec<Hit>,
    pub page: u32,
}

/// Accumulated results for one search key.
///
/// `hits` is arrival-ordered: earliest page first, within a page in API
/// order. `page` is the highest page merged so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub page: u32,
    pub hits: Vec<Hit>,
}

/// Field the visible hit list is ordered by.
///
/// Exhaustive by construction — every variant maps to a comparator in
/// [`crate::sort`], so there is no "unknown sort key" failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Original arrival order.
    #[default]
    None,
    Title,
    Author,
    Comments,
    Points,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::None => write!(f, "none"),
            SortKey::Title => write!(f, "title"),
            SortKey::Author => write!(f, "author"),
            SortKey::Comments => write!(f, "comments"),
            SortKey::Points => write!(f, "points"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
