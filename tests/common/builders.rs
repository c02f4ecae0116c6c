//! Test builders — ergonomic constructors for `Hit` and `SearchPage` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use hackle_core::{Hit, SearchPage};

// ---------------------------------------------------------------------------
// HitBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Hit`] test fixtures.
///
/// # Example
///
/// ```rust
/// let hit = HitBuilder::new("100", "A story about borrow checking")
///     .author("pg")
///     .points(42)
///     .comments(17)
///     .build();
/// ```
pub struct HitBuilder {
    object_id: String,
    title: String,
    author: String,
    url: String,
    num_comments: u32,
    points: u32,
}

impl HitBuilder {
    pub fn new(object_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            title: title.into(),
            author: "test-author".to_string(),
            url: "https://example.com".to_string(),
            num_comments: 0,
            points: 0,
        }
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn comments(mut self, n: u32) -> Self {
        self.num_comments = n;
        self
    }

    pub fn points(mut self, n: u32) -> Self {
        self.points = n;
        self
    }

    pub fn build(self) -> Hit {
        Hit {
            object_id: self.object_id,
            title: self.title,
            author: self.author,
            url: self.url,
            num_comments: self.num_comments,
            points: self.points,
        }
    }

    /// The wire representation the Algolia API would send for this hit.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "objectID": self.object_id,
            "title": self.title,
            "author": self.author,
            "url": self.url,
            "num_comments": self.num_comments,
            "points": self.points,
        })
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a hit with just an id and title.
pub fn hit(id: &str, title: &str) -> Hit {
    HitBuilder::new(id, title).build()
}

/// Build a result page from a list of hits.
pub fn results_page(page: u32, hits: Vec<Hit>) -> SearchPage {
    SearchPage { hits, page }
}

/// Sequentially-numbered hits `id0..idN`, handy for merge-order assertions.
pub fn numbered_hits(prefix: &str, count: usize) -> Vec<Hit> {
    (0..count)
        .map(|i| hit(&format!("{prefix}{i}"), &format!("story {prefix}{i}")))
        .collect()
}
