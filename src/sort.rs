//! In-place alphabetic ordering of a parsed forest.

use std::cmp::Ordering;

use crate::item::Item;

/// Sort every sibling sequence reachable from `items` alphabetically by
/// name, at every depth.
///
/// The comparison is case-insensitive; the underlying sort is stable, so
/// entries with equal names keep their parsed order. Idempotent once
/// applied.
pub fn sort_items(items: &mut [Item]) {
    items.sort_by(|a, b| compare_names(a.name(), b.name()));
    for item in items.iter_mut() {
        if let Item::Node { children, .. } = item {
            sort_items(children);
        }
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
