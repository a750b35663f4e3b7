// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Least-enlargement child selection for the insertion descent.

use crate::node::Node;
use crate::types::{Rect, Scalar, enlargement};

/// Pick the child of `node` whose rectangle grows the least when absorbing `rect`.
///
/// Enlargement is `volume(union(child, rect)) - volume(child)`. Children are
/// scanned in index order with a strict `<`, so the lowest index wins ties.
///
/// # Panics
///
/// Panics if `node` is not an internal node (level > 0).
pub fn choose_child<T: Scalar, I, const D: usize>(node: &Node<T, I, D>, rect: &Rect<T, D>) -> usize {
    assert!(
        node.level > 0,
        "child selection requires an internal node, got level {}",
        node.level
    );
    let mut best_idx = 0_usize;
    let mut best_cost: Option<T::Acc> = None;
    for (i, c) in node.children.iter().enumerate() {
        let cost = enlargement(&c.rect, rect);
        if best_cost.map(|bc| cost < bc).unwrap_or(true) {
            best_cost = Some(cost);
            best_idx = i;
        }
    }
    best_idx
}
