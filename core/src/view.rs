//! Derived view: the filtered and sorted projection of the comment list.
//!
//! `derive_view` never touches the canonical list. It borrows the items,
//! filters into a fresh `Vec` and sorts that copy.

use std::cmp::Ordering;

use crate::types::{Comment, SortMode};

/// Filter `items` by `search_term` and order the result per `sort`.
pub fn derive_view(items: &[Comment], search_term: &str, sort: SortMode) -> Vec<Comment> {
    let needle = search_term.to_lowercase();
    let mut view: Vec<Comment> = items
        .iter()
        .filter(|c| matches_search(c, &needle))
        .cloned()
        .collect();

    match sort {
        SortMode::None => {}
        SortMode::AscendingByName => view.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortMode::DescendingByName => view.sort_by(|a, b| compare_names(&b.name, &a.name)),
    }
    view
}

/// Case-insensitive substring match on name, email or body. `needle` must
/// already be lowercased; an empty needle matches everything.
fn matches_search(comment: &Comment, needle: &str) -> bool {
    needle.is_empty()
        || comment.name.to_lowercase().contains(needle)
        || comment.email.to_lowercase().contains(needle)
        || comment.body.to_lowercase().contains(needle)
}

/// Collation-style comparison: letters compare case-insensitively first,
/// lowercase sorts before uppercase on a tie, then raw code points decide.
///
/// Only matches locale collation for ASCII names; accented letters sort by
/// code point, so "Édith" lands after "Zoe".
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
