// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic node split.
//!
//! An overflowing node (one child past `max_nodes`) is split in two steps:
//!
//! 1. **Seeds**: over every pair `i < j` compute the dead space
//!    `volume(union(i, j)) - volume(i) - volume(j)` and keep the first pair
//!    that maximizes it. Seed `i` stays in the original node, seed `j` starts
//!    the new sibling.
//! 2. **Distribution**: while children remain, take the one whose
//!    enlargement preference `|inc_a - inc_b|` is strongest (first wins ties)
//!    and add it to the group it enlarges less (group A on ties).
//!
//! The pairwise seed scan is what makes the split quadratic in `max_nodes`.

use alloc::vec::Vec;

use crate::config::{Fanout, MinFill};
use crate::node::Node;
use crate::types::{Scalar, enlargement, union, volume};

/// Split `node` in place and return the new sibling.
///
/// On return `node` keeps one group of its former children and the sibling
/// holds the other; both are non-empty, disjoint, and together hold every
/// former child exactly once. The sibling has the same level as `node`.
/// Both bounding rectangles are recomputed from their groups.
///
/// # Panics
///
/// Panics if `node` has fewer than two children.
pub fn split<T: Scalar, I, const D: usize>(
    node: &mut Node<T, I, D>,
    fanout: &Fanout,
) -> Node<T, I, D> {
    let mut pending = core::mem::take(&mut node.children);
    assert!(
        pending.len() >= 2,
        "a split needs at least two children, got {}",
        pending.len()
    );

    let (seed_a, seed_b) = pick_seeds(&pending);
    // seed_a < seed_b, so removing b first keeps a's index valid.
    let b = pending.remove(seed_b);
    let a = pending.remove(seed_a);

    node.rect = a.rect;
    node.children.push(a);
    let mut sibling = Node::empty_at(node.level);
    sibling.rect = b.rect;
    sibling.children.push(b);

    distribute(node, &mut sibling, pending, fanout);

    diag!(
        trace,
        node_level = node.level,
        kept = node.children.len(),
        moved = sibling.children.len(),
        "split node"
    );
    sibling
}

/// Indices `(i, j)`, `i < j`, of the pair wasting the most volume when combined.
fn pick_seeds<T: Scalar, I, const D: usize>(children: &[Node<T, I, D>]) -> (usize, usize) {
    let volumes: Vec<T::Acc> = children.iter().map(|c| volume(&c.rect)).collect();
    let mut best: Option<(T::Acc, usize, usize)> = None;
    for i in 0..children.len() {
        for j in (i + 1)..children.len() {
            let combined = volume(&union(&children[i].rect, &children[j].rect));
            let waste = T::acc_sub(T::acc_sub(combined, volumes[i]), volumes[j]);
            if best.map(|(bw, _, _)| waste > bw).unwrap_or(true) {
                best = Some((waste, i, j));
            }
        }
    }
    best.map(|(_, i, j)| (i, j)).unwrap_or((0, 1))
}

/// Assign every pending child to group `a` or group `b`.
fn distribute<T: Scalar, I, const D: usize>(
    a: &mut Node<T, I, D>,
    b: &mut Node<T, I, D>,
    mut pending: Vec<Node<T, I, D>>,
    fanout: &Fanout,
) {
    while !pending.is_empty() {
        if fanout.min_fill() == MinFill::Guttman {
            let min = fanout.min_nodes();
            if a.children.len() + pending.len() <= min {
                absorb_all(a, pending);
                return;
            }
            if b.children.len() + pending.len() <= min {
                absorb_all(b, pending);
                return;
            }
        }

        let mut pick: Option<(T::Acc, usize, bool)> = None;
        for (i, c) in pending.iter().enumerate() {
            let inc_a = enlargement(&a.rect, &c.rect);
            let inc_b = enlargement(&b.rect, &c.rect);
            let preference = T::acc_abs(T::acc_sub(inc_a, inc_b));
            if pick.map(|(bp, _, _)| preference > bp).unwrap_or(true) {
                pick = Some((preference, i, inc_a <= inc_b));
            }
        }
        let Some((_, idx, to_a)) = pick else {
            break;
        };
        let child = pending.remove(idx);
        let group = if to_a { &mut *a } else { &mut *b };
        group.rect = union(&group.rect, &child.rect);
        group.children.push(child);
    }
}

fn absorb_all<T: Scalar, I, const D: usize>(group: &mut Node<T, I, D>, rest: Vec<Node<T, I, D>>) {
    for child in rest {
        group.rect = union(&group.rect, &child.rect);
        group.children.push(child);
    }
}
