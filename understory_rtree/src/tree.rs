// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owning tree type and the recursive insertion path.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::config::Fanout;
use crate::node::Node;
use crate::select::choose_child;
use crate::split::split;
use crate::types::{Rect, Scalar, union};

/// Incremental R-tree over `D`-dimensional rectangles tagged with identifiers `I`.
///
/// Inserting descends by least enlargement to level 0, appends a leaf element,
/// and splits overflowing nodes on the way back up. A split that reaches the
/// root grows the tree by one level.
pub struct RTree<T: Scalar, I, const D: usize> {
    root: Node<T, I, D>,
    fanout: Fanout,
    len: usize,
}

impl<T: Scalar, I, const D: usize> RTree<T, I, D> {
    /// Create an empty tree with [`Fanout::default`].
    pub fn new() -> Self {
        Self::with_fanout(Fanout::default())
    }

    /// Create an empty tree with the given fan-out bounds.
    pub fn with_fanout(fanout: Fanout) -> Self {
        diag!(
            debug,
            dims = D,
            max_nodes = fanout.max_nodes(),
            min_nodes = fanout.min_nodes(),
            "create rtree"
        );
        Self {
            root: Node::empty_at(0),
            fanout,
            len: 0,
        }
    }

    /// Insert a rectangle tagged with `id`.
    ///
    /// Rectangles are not validated; an inverted axis skews the volume
    /// heuristics but never corrupts the structure.
    pub fn insert(&mut self, rect: Rect<T, D>, id: I) {
        let split = Self::insert_node(&mut self.root, rect, id, &self.fanout);
        self.len += 1;
        if let Some(sibling) = split {
            self.grow_root(sibling);
        }
    }

    /// Recursive descent. Returns the new sibling if `node` was split.
    fn insert_node(
        node: &mut Node<T, I, D>,
        rect: Rect<T, D>,
        id: I,
        fanout: &Fanout,
    ) -> Option<Node<T, I, D>> {
        if node.level == 0 {
            node.children.push(Node::element(rect, id));
            if node.children.len() <= fanout.max_nodes() {
                node.rect = union(&node.rect, &rect);
                return None;
            }
            return Some(split(node, fanout));
        }

        let idx = choose_child(node, &rect);
        let below = Self::insert_node(&mut node.children[idx], rect, id, fanout);
        // Every ancestor keeps covering the inserted geometry.
        node.rect = union(&node.rect, &rect);
        let sibling = below?;
        let sibling_rect = sibling.rect;
        node.children.push(sibling);
        if node.children.len() <= fanout.max_nodes() {
            node.rect = union(&node.rect, &sibling_rect);
            return None;
        }
        Some(split(node, fanout))
    }

    /// Replace the root by a node one level taller owning the old root and `sibling`.
    fn grow_root(&mut self, sibling: Node<T, I, D>) {
        let old_root = core::mem::replace(&mut self.root, Node::empty_at(0));
        let level = old_root.level + 1;
        self.root = Node::with_children(level, vec![old_root, sibling]);
        diag!(debug, height = self.height(), "root split, tree grew");
    }

    /// Number of stored rectangles.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no rectangle has been inserted.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of structural levels: the root's level plus one.
    pub fn height(&self) -> usize {
        usize::try_from(self.root.level).map_or(0, |l| l + 1)
    }

    /// The root node.
    pub const fn root(&self) -> &Node<T, I, D> {
        &self.root
    }

    /// Fan-out bounds fixed at construction.
    pub const fn fanout(&self) -> &Fanout {
        &self.fanout
    }

    /// Bounding rectangle of everything inserted; [`Rect::empty`] for an empty tree.
    pub const fn bounds(&self) -> &Rect<T, D> {
        &self.root.rect
    }

    /// Iterate stored rectangles and their identifiers, depth first.
    pub fn elements(&self) -> Elements<'_, T, I, D> {
        Elements {
            stack: vec![&self.root],
        }
    }

    /// Drop every element and return to a single empty level-0 root.
    pub fn clear(&mut self) {
        self.root = Node::empty_at(0);
        self.len = 0;
    }
}

impl<T: Scalar, I, const D: usize> Default for RTree<T, I, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, I, const D: usize> Extend<(Rect<T, D>, I)> for RTree<T, I, D> {
    fn extend<It: IntoIterator<Item = (Rect<T, D>, I)>>(&mut self, iter: It) {
        for (rect, id) in iter {
            self.insert(rect, id);
        }
    }
}

impl<T: Scalar, I, const D: usize> FromIterator<(Rect<T, D>, I)> for RTree<T, I, D> {
    fn from_iter<It: IntoIterator<Item = (Rect<T, D>, I)>>(iter: It) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Scalar, I, const D: usize> Debug for RTree<T, I, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RTree")
            .field("dims", &D)
            .field("max_nodes", &self.fanout.max_nodes())
            .field("min_nodes", &self.fanout.min_nodes())
            .field("len", &self.len)
            .field("height", &self.height())
            .field("bounds", &self.root.rect)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "tracing")]
impl<T: Scalar, I, const D: usize> Drop for RTree<T, I, D> {
    fn drop(&mut self) {
        tracing::debug!(len = self.len, height = self.height(), "destroy rtree");
    }
}

/// Depth-first iterator over stored rectangles and identifiers.
///
/// Created by [`RTree::elements`].
#[derive(Debug)]
pub struct Elements<'a, T, I, const D: usize> {
    stack: Vec<&'a Node<T, I, D>>,
}

impl<'a, T, I, const D: usize> Iterator for Elements<'a, T, I, D> {
    type Item = (&'a Rect<T, D>, &'a I);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if let Some(id) = node.id.as_ref() {
                return Some((&node.rect, id));
            }
            self.stack.extend(node.children.iter().rev());
        }
        None
    }
}
