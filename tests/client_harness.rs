#![allow(unused)]
//! Search client integration harness.
//!
//! # What this covers
//!
//! [`AlgoliaClient`] against a local fake of the Algolia HTTP API:
//!
//! - **Request shape**: the client sends `query`, `page`, and `hitsPerPage`
//!   exactly as given.
//! - **Response parsing**: hits deserialize from the wire envelope; extra
//!   envelope and hit fields are ignored.
//! - **Error mapping**: malformed bodies become `SearchError::Parse`; HTTP
//!   5xx and refused connections become `SearchError::Network`.
//! - **End to end**: a coordinator driven through a real client round-trip
//!   shows the fetched hits.
//!
//! # What this does NOT cover
//!
//! - Coordinator cache semantics with canned pages (see coordinator_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test client_harness
//! ```

mod common;
use common::*;

use hackle_api::{AlgoliaClient, SearchClient};
use hackle_core::{Action, Coordinator, SearchError};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn sends_query_page_and_page_size() {
    let api = FakeAlgolia::start().await.unwrap();
    let client = AlgoliaClient::new(api.base_url());

    client.search("redux", 2, 100).await.unwrap();

    assert_eq!(api.requests().await, vec![("redux".to_string(), 2, 100)]);
}

#[tokio::test]
async fn parses_hits_from_the_wire_envelope() {
    let api = FakeAlgolia::start().await.unwrap();
    api.set_hits(
        "redux",
        0,
        vec![
            HitBuilder::new("100", "first").author("amy").points(7).to_json(),
            HitBuilder::new("200", "second").comments(3).to_json(),
        ],
    )
    .await;

    let client = AlgoliaClient::new(api.base_url());
    let page = client.search("redux", 0, 100).await.unwrap();

    assert_eq!(page.page, 0);
    assert_hit_ids!(page.hits, ["100", "200"]);
    assert_eq!(page.hits[0].author, "amy");
    assert_eq!(page.hits[0].points, 7);
    assert_eq!(page.hits[1].num_comments, 3);
}

#[tokio::test]
async fn ignores_extra_hit_fields() {
    let api = FakeAlgolia::start().await.unwrap();
    let mut raw = HitBuilder::new("1", "story").to_json();
    raw["_tags"] = serde_json::json!(["story", "author_pg"]);
    raw["created_at"] = serde_json::json!("2024-01-01T00:00:00Z");
    api.set_hits("q", 0, vec![raw]).await;

    let client = AlgoliaClient::new(api.base_url());
    let page = client.search("q", 0, 10).await.unwrap();
    assert_hit_ids!(page.hits, ["1"]);
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let api = FakeAlgolia::start().await.unwrap();
    api.set_raw("q", 0, 200, r#"{"hits": "not-an-array"}"#).await;

    let client = AlgoliaClient::new(api.base_url());
    let err = client.search("q", 0, 10).await.unwrap_err();
    assert!(matches!(err, SearchError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn server_error_is_a_network_error() {
    let api = FakeAlgolia::start().await.unwrap();
    api.set_raw("q", 0, 500, "internal error").await;

    let client = AlgoliaClient::new(api.base_url());
    let err = client.search("q", 0, 10).await.unwrap_err();
    assert!(matches!(err, SearchError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    // Bind-and-drop to get a port nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = AlgoliaClient::new(format!("http://{addr}"));
    let err = client.search("q", 0, 10).await.unwrap_err();
    assert!(matches!(err, SearchError::Network(_)), "got {err:?}");
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

/// Drive a coordinator with a real client: every fetch effect goes over HTTP
/// and the result is fed back as an action, exactly like the TUI shell does.
#[tokio::test]
async fn coordinator_round_trip_through_the_client() {
    let api = FakeAlgolia::start().await.unwrap();
    api.set_hits(
        "redux",
        0,
        vec![
            HitBuilder::new("a", "one").to_json(),
            HitBuilder::new("b", "two").to_json(),
        ],
    )
    .await;
    api.set_hits("redux", 1, vec![HitBuilder::new("c", "three").to_json()]).await;

    let client = AlgoliaClient::new(api.base_url());
    let mut c = Coordinator::new();

    c.apply(Action::SetQuery("redux".to_string()));
    let spec = c.apply(Action::SubmitQuery).expect("page 0 fetch");
    let page = client.search(&spec.key, spec.page, 100).await.unwrap();
    c.apply(Action::FetchSucceeded { key: spec.key, page });
    assert_hit_ids!(c.visible_hits(), ["a", "b"]);

    let spec = c.apply(Action::RequestMore).expect("page 1 fetch");
    assert_eq!(spec.page, 1);
    let page = client.search(&spec.key, spec.page, 100).await.unwrap();
    c.apply(Action::FetchSucceeded { key: spec.key, page });
    assert_hit_ids!(c.visible_hits(), ["a", "b", "c"]);

    // Both requests hit the wire; the cache replay below does not.
    c.apply(Action::SetQuery("redux".to_string()));
    assert!(c.apply(Action::SubmitQuery).is_none());
    assert_eq!(api.requests().await.len(), 2);
}
