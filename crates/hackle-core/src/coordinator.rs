//! Fetch coordination — the state machine between the UI and the search API.
//!
//! The [`Coordinator`] owns the per-key results cache, the committed search
//! key, the in-flight bookkeeping, and the sort selection. It is mutated
//! exclusively through [`Coordinator::apply`]: the shell feeds it an
//! [`Action`] and executes the [`FetchSpec`] effect when one comes back.
//! The coordinator never blocks and never performs I/O itself, so every
//! transition is testable without a network.
//!
//! # Loading state
//!
//! Loading is tracked per search key. A second fetch for a key is refused
//! while one is already outstanding, which both serialises page merges
//! within a key and keeps an abandoned fetch for key A from lying about the
//! loading state of key B. `is_loading` reports the flag of the *currently
//! committed* key only.
//!
//! # Merge rules
//!
//! A completed page-0 fetch replaces the key's hits outright (a fresh search
//! supersedes stale results); any later page appends in received order. The
//! outcome is merged into the key it was issued for, whether or not that key
//! is still the one on screen. Failures never touch the cache.

use std::collections::{HashMap, HashSet};

use crate::error::SearchError;
use crate::sort;
use crate::types::{CacheEntry, Hit, SearchPage, SortKey};

/// A state transition applied by [`Coordinator::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the query text as the user types. No fetch, no cache effect.
    SetQuery(String),
    /// Commit the query as the search key; fetch page 0 unless cached.
    SubmitQuery,
    /// Fetch the next page for the committed key.
    RequestMore,
    /// Select a sort field, or flip direction when it is already selected.
    ToggleSort(SortKey),
    /// A fetch resolved with a page of results.
    FetchSucceeded { key: String, page: SearchPage },
    /// A fetch failed; the cache is left untouched.
    FetchFailed { key: String, error: SearchError },
}

/// A fetch the shell must execute: `GET /search` for `(key, page)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSpec {
    pub key: String,
    pub page: u32,
}

/// UI-facing search state: query text, committed key, results cache,
/// per-key loading flags, and the sort selection.
#[derive(Debug, Default)]
pub struct Coordinator {
    query: String,
    search_key: String,
    cache: HashMap<String, CacheEntry>,
    in_flight: HashSet<String>,
    sort_key: SortKey,
    sort_reverse: bool,
    last_error: Option<SearchError>,
}

impl Coordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action and return the fetch it requires, if any.
    ///
    /// Continuation actions (`FetchSucceeded` / `FetchFailed`) never produce
    /// an effect; only `SubmitQuery` and `RequestMore` can.
    pub fn apply(&mut self, action: Action) -> Option<FetchSpec> {
        match action {
            Action::SetQuery(text) => {
                self.query = text;
                None
            }
            Action::SubmitQuery => {
                self.search_key = self.query.clone();
                if self.needs_search(&self.search_key) {
                    self.begin_fetch(self.search_key.clone(), 0)
                } else {
                    None
                }
            }
            Action::RequestMore => {
                let key = self.search_key.clone();
                let page = self.cache.get(&key).map(|e| e.page + 1).unwrap_or(0);
                self.begin_fetch(key, page)
            }
            Action::ToggleSort(key) => {
                if self.sort_key == key {
                    self.sort_reverse = !self.sort_reverse;
                } else {
                    self.sort_key = key;
                    self.sort_reverse = false;
                }
                None
            }
            Action::FetchSucceeded { key, page } => {
                self.merge(key, page);
                None
            }
            Action::FetchFailed { key, error } => {
                self.in_flight.remove(&key);
                self.last_error = Some(error);
                None
            }
        }
    }

    /// True when no cache entry exists for `key` — an entry exists iff at
    /// least one fetch for the key has completed successfully.
    pub fn needs_search(&self, key: &str) -> bool {
        !self.cache.contains_key(key)
    }

    /// The current entry's hits under the selected sort, or empty when
    /// nothing has been fetched for the committed key yet. Never mutates
    /// the cache.
    pub fn visible_hits(&self) -> Vec<Hit> {
        match self.cache.get(&self.search_key) {
            Some(entry) => sort::sorted(&entry.hits, self.sort_key, self.sort_reverse),
            None => Vec::new(),
        }
    }

    /// Whether a fetch for the committed key is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.contains(&self.search_key)
    }

    /// Highest page merged for the committed key, if any.
    pub fn current_page(&self) -> Option<u32> {
        self.cache.get(&self.search_key).map(|e| e.page)
    }

    /// Unsorted hit count for the committed key.
    pub fn hit_count(&self) -> usize {
        self.cache
            .get(&self.search_key)
            .map(|e| e.hits.len())
            .unwrap_or(0)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_key(&self) -> &str {
        &self.search_key
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn is_sort_reverse(&self) -> bool {
        self.sort_reverse
    }

    /// Error from the most recent failed fetch, cleared when a new fetch is
    /// issued.
    pub fn last_error(&self) -> Option<&SearchError> {
        self.last_error.as_ref()
    }

    /// Raw cache entry for a key. Read-only; used by tests and the shell.
    pub fn cache_entry(&self, key: &str) -> Option<&CacheEntry> {
        self.cache.get(key)
    }

    /// Mark `key` in flight and emit the fetch, unless one is already
    /// outstanding for it.
    fn begin_fetch(&mut self, key: String, page: u32) -> Option<FetchSpec> {
        if self.in_flight.contains(&key) {
            return None;
        }
        self.in_flight.insert(key.clone());
        self.last_error = None;
        Some(FetchSpec { key, page })
    }

    fn merge(&mut self, key: String, page: SearchPage) {
        self.in_flight.remove(&key);
        if page.page == 0 {
            // A fresh page-0 result supersedes whatever was cached for the key.
            self.cache.insert(
                key,
                CacheEntry {
                    page: 0,
                    hits: page.hits,
                },
            );
        } else {
            let entry = self.cache.entry(key).or_insert_with(|| CacheEntry {
                page: page.page,
                hits: Vec::new(),
            });
            entry.hits.extend(page.hits);
            entry.page = page.page;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
