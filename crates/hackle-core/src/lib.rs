//! hackle-core — search cache and fetch coordination for hackle.
//!
//! This crate holds everything with real state: the per-query results cache,
//! the [`Coordinator`] state machine driving it, and the sort catalog applied
//! at read time. It is deliberately synchronous and UI-free.
//!
//! # Architecture
//!
//! ```text
//! PresentationLayer ──Action──► Coordinator ──FetchSpec──► SearchClient
//!        ▲                          │                          │
//!        └────── visible_hits ──────┴◄──── FetchSucceeded ─────┘
//! ```
//!
//! The coordinator never performs I/O. The shell applies an [`Action`], and
//! when the returned [`FetchSpec`] is `Some`, it executes the fetch and
//! feeds the outcome back as another action.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod sort;
pub mod types;

pub use coordinator::{Action, Coordinator, FetchSpec};
pub use error::SearchError;
pub use types::{CacheEntry, Hit, SearchPage, SortKey};
