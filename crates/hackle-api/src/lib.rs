//! hackle-api — the search client collaborator.
//!
//! [`SearchClient`] is the one outbound call the coordinator's effects need:
//! a single asynchronous request for `(query, page)` that resolves to a
//! [`SearchPage`] or fails with a [`SearchError`]. [`AlgoliaClient`] is the
//! production implementation against the Hacker News Algolia API; tests
//! substitute their own implementation or point the base URL at a local
//! fake server.

use async_trait::async_trait;
use hackle_core::{SearchError, SearchPage};
use tracing::debug;

/// One asynchronous search request.
///
/// Implementations must be shareable across tasks; the shell holds the
/// client behind an `Arc<dyn SearchClient>` and clones it into every
/// spawned fetch.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(
        &self,
        query: &str,
        page: u32,
        hits_per_page: u32,
    ) -> Result<SearchPage, SearchError>;
}

/// `reqwest`-backed client for `GET <base>/search`.
pub struct AlgoliaClient {
    http: reqwest::Client,
    base_url: String,
}

impl AlgoliaClient {
    /// Build a client for the given API base, e.g.
    /// `https://hn.algolia.com/api/v1`. A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl SearchClient for AlgoliaClient {
    async fn search(
        &self,
        query: &str,
        page: u32,
        hits_per_page: u32,
    ) -> Result<SearchPage, SearchError> {
        let url = format!("{}/search", self.base_url);
        debug!(%url, query, page, hits_per_page, "issuing search request");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("query", query),
                ("page", &page.to_string()),
                ("hitsPerPage", &hits_per_page.to_string()),
            ])
            .send()
            .await
            .map_err(|err| SearchError::Network(err.to_string()))?
            .error_for_status()
            .map_err(|err| SearchError::Network(err.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|err| SearchError::Network(err.to_string()))?;

        let result = parse_page(&body);
        if let Ok(ref page) = result {
            debug!(hits = page.hits.len(), page = page.page, "search request resolved");
        }
        result
    }
}

/// Interpret a response body as a search page.
fn parse_page(body: &str) -> Result<SearchPage, SearchError> {
    serde_json::from_str(body).map_err(|err| SearchError::Parse(err.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
