//! Domain-specific assertion macros for hackle harnesses.
//!
//! These add context-rich failure messages that make it clear *what*
//! coordinator guarantee was violated.

// ---------------------------------------------------------------------------
// Hit-order assertions
// ---------------------------------------------------------------------------

/// Assert that a slice of `Hit`s has exactly the given object IDs, in order.
///
/// ```rust
/// assert_hit_ids!(coordinator.visible_hits(), ["1", "2", "3"]);
/// ```
#[macro_export]
macro_rules! assert_hit_ids {
    ($hits:expr, [$($id:expr),* $(,)?]) => {{
        let hits: &[hackle_core::Hit] = &$hits;
        let actual: Vec<&str> = hits.iter().map(|h| h.object_id.as_str()).collect();
        let expected: Vec<&str> = vec![$($id),*];
        if actual != expected {
            panic!(
                "assert_hit_ids! failed:\n  expected: {:?}\n  actual:   {:?}",
                expected, actual
            );
        }
    }};
}

/// Assert the cached entry for `key` sits at `page`.
#[macro_export]
macro_rules! assert_cached_page {
    ($coordinator:expr, $key:expr, $page:expr) => {{
        let key: &str = $key;
        match $coordinator.cache_entry(key) {
            Some(entry) if entry.page == $page => {}
            Some(entry) => panic!(
                "assert_cached_page! failed for {:?}:\n  expected page {}\n  actual page   {}",
                key, $page, entry.page
            ),
            None => panic!(
                "assert_cached_page! failed: no cache entry for {:?}",
                key
            ),
        }
    }};
}
