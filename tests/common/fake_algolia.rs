//! Fake Algolia search API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `GET /search?query=&page=&hitsPerPage=` exactly like the
//! Hacker News Algolia endpoint. Each `(query, page)` pair is configured up
//! front with either a hit list or a raw `(status, body)` response; anything
//! unconfigured returns an empty result page.
//!
//! # Example
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use common::fake_algolia::FakeAlgolia;
//!
//! let api = FakeAlgolia::start().await.unwrap();
//! api.set_hits("redux", 0, vec![serde_json::json!({ /* a hit */ })]).await;
//!
//! // Point an AlgoliaClient at api.base_url()
//! let url = api.base_url();
//! # });
//! ```

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Configured response for one `(query, page)` pair.
enum Canned {
    Hits(Vec<serde_json::Value>),
    Raw { status: StatusCode, body: String },
}

#[derive(Default)]
struct ApiState {
    responses: HashMap<(String, u32), Canned>,
    /// Every request seen, in order, as `(query, page, hits_per_page)`.
    requests: Vec<(String, u32, u32)>,
}

/// Handle to the running fake Algolia server.
pub struct FakeAlgolia {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeAlgolia {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/search", get(search))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Serve these hits for `(query, page)`.
    pub async fn set_hits(&self, query: &str, page: u32, hits: Vec<serde_json::Value>) {
        let mut state = self.state.lock().await;
        state
            .responses
            .insert((query.to_string(), page), Canned::Hits(hits));
    }

    /// Serve a raw status + body for `(query, page)` — for malformed-response
    /// and server-error tests.
    pub async fn set_raw(&self, query: &str, page: u32, status: u16, body: &str) {
        let mut state = self.state.lock().await;
        state.responses.insert(
            (query.to_string(), page),
            Canned::Raw {
                status: StatusCode::from_u16(status).unwrap(),
                body: body.to_string(),
            },
        );
    }

    /// Every `(query, page, hitsPerPage)` triple the server has seen.
    pub async fn requests(&self) -> Vec<(String, u32, u32)> {
        self.state.lock().await.requests.clone()
    }
}

async fn search(
    State(state): State<Arc<Mutex<ApiState>>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let query = params.get("query").cloned().unwrap_or_default();
    let page: u32 = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0);
    let hits_per_page: u32 = params
        .get("hitsPerPage")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0);

    let mut state = state.lock().await;
    state.requests.push((query.clone(), page, hits_per_page));

    match state.responses.get(&(query.clone(), page)) {
        Some(Canned::Raw { status, body }) => (*status, body.clone()),
        Some(Canned::Hits(hits)) => {
            let body = serde_json::json!({
                "hits": hits,
                "page": page,
                "nbHits": hits.len(),
                "query": query,
                "processingTimeMS": 1,
            });
            (StatusCode::OK, body.to_string())
        }
        None => {
            let body = serde_json::json!({
                "hits": [],
                "page": page,
                "nbHits": 0,
                "query": query,
                "processingTimeMS": 1,
            });
            (StatusCode::OK, body.to_string())
        }
    }
}
