//! Sort catalog — one ordering per [`SortKey`], applied only at read time.
//!
//! Sorting always works on a copy; the cache itself stays in arrival order.
//! `sort_by` is stable, so hits comparing equal keep their relative arrival
//! order and reapplying a sort to its own output is a no-op.

use crate::types::{Hit, SortKey};
use std::cmp::Ordering;

/// Compare two hits under the given sort key.
///
/// `None` treats everything as equal (stable sort then preserves arrival
/// order). Title and author sort ascending; comments and points sort
/// descending, highest first.
pub fn compare(key: SortKey, a: &Hit, b: &Hit) -> Ordering {
    match key {
        SortKey::None => Ordering::Equal,
        SortKey::Title => a.title.cmp(&b.title),
        SortKey::Author => a.author.cmp(&b.author),
        SortKey::Comments => b.num_comments.cmp(&a.num_comments),
        SortKey::Points => b.points.cmp(&a.points),
    }
}

/// Return a sorted copy of `hits`, reversed when `reverse` is set.
pub fn sorted(hits: &[Hit], key: SortKey, reverse: bool) -> Vec<Hit> {
    let mut out = hits.to_vec();
    out.sort_by(|a, b| compare(key, a, b));
    if reverse {
        out.reverse();
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hit(id: &str, title: &str, author: &str, comments: u32, points: u32) -> Hit {
        Hit {
            object_id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            url: format!("https://news.ycombinator.com/item?id={id}"),
            num_comments: comments,
            points,
        }
    }

    fn ids(hits: &[Hit]) -> Vec<&str> {
        hits.iter().map(|h| h.object_id.as_str()).collect()
    }

    #[test]
    fn none_preserves_arrival_order() {
        let hits = vec![hit("3", "c", "x", 0, 0), hit("1", "a", "y", 0, 0)];
        assert_eq!(sorted(&hits, SortKey::None, false), hits);
    }

    #[test]
    fn title_sorts_ascending() {
        let hits = vec![
            hit("1", "zig", "a", 0, 0),
            hit("2", "ada", "b", 0, 0),
            hit("3", "ml", "c", 0, 0),
        ];
        assert_eq!(ids(&sorted(&hits, SortKey::Title, false)), ["2", "3", "1"]);
    }

    #[test]
    fn author_sorts_ascending() {
        let hits = vec![hit("1", "t", "walt", 0, 0), hit("2", "t", "ada", 0, 0)];
        assert_eq!(ids(&sorted(&hits, SortKey::Author, false)), ["2", "1"]);
    }

    #[test]
    fn comments_sorts_descending() {
        // Scenario: comment counts [5, 10, 2] come back as [10, 5, 2].
        let hits = vec![
            hit("1", "a", "x", 5, 0),
            hit("2", "b", "y", 10, 0),
            hit("3", "c", "z", 2, 0),
        ];
        assert_eq!(
            ids(&sorted(&hits, SortKey::Comments, false)),
            ["2", "1", "3"]
        );
    }

    #[test]
    fn points_sorts_descending() {
        let hits = vec![hit("1", "a", "x", 0, 7), hit("2", "b", "y", 0, 90)];
        assert_eq!(ids(&sorted(&hits, SortKey::Points, false)), ["2", "1"]);
    }

    #[test]
    fn equal_keys_keep_arrival_order() {
        let hits = vec![
            hit("1", "same", "x", 3, 0),
            hit("2", "same", "y", 3, 0),
            hit("3", "same", "z", 3, 0),
        ];
        assert_eq!(ids(&sorted(&hits, SortKey::Title, false)), ["1", "2", "3"]);
        assert_eq!(
            ids(&sorted(&hits, SortKey::Comments, false)),
            ["1", "2", "3"]
        );
    }

    #[test]
    fn sorting_own_output_is_identity() {
        let hits = vec![
            hit("1", "b", "x", 4, 1),
            hit("2", "a", "y", 9, 2),
            hit("3", "b", "z", 4, 3),
        ];
        let once = sorted(&hits, SortKey::Comments, false);
        let twice = sorted(&once, SortKey::Comments, false);
        assert_eq!(once, twice);
    }

    #[test]
    fn reverse_flips_the_order() {
        let hits = vec![hit("1", "a", "x", 0, 0), hit("2", "b", "y", 0, 0)];
        assert_eq!(ids(&sorted(&hits, SortKey::Title, true)), ["2", "1"]);
        assert_eq!(ids(&sorted(&hits, SortKey::None, true)), ["2", "1"]);
    }

    #[test]
    fn sorting_does_not_mutate_input() {
        let hits = vec![hit("2", "b", "y", 1, 0), hit("1", "a", "x", 2, 0)];
        let before = hits.clone();
        let _ = sorted(&hits, SortKey::Title, false);
        assert_eq!(hits, before);
    }
}
