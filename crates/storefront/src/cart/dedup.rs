//! Collapse a line-item list to one entry per product.

use std::collections::HashMap;

use vitrine_core::{LineItem, ProductId};

/// Produce exactly one entry per distinct product ID.
///
/// For repeated IDs the later occurrence's values win, but the entry stays at
/// the position where the ID first appeared. Runs in linear time.
#[must_use]
pub fn deduplicate(items: &[LineItem]) -> Vec<LineItem> {
    let mut positions: HashMap<&ProductId, usize> = HashMap::with_capacity(items.len());
    let mut unique: Vec<LineItem> = Vec::with_capacity(items.len());

    for item in items {
        if let Some(&pos) = positions.get(&item.id) {
            if let Some(slot) = unique.get_mut(pos) {
                *slot = item.clone();
            }
        } else {
            positions.insert(&item.id, unique.len());
            unique.push(item.clone());
        }
    }

    unique
}
