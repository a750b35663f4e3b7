// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes: structural containers and terminal leaf elements.

use alloc::vec::Vec;

use crate::types::{Rect, Scalar, union};

bitflags::bitflags! {
    /// Structural role of a [`Node`].
    ///
    /// Internal nodes (level > 0) carry no flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Terminal entry wrapping one inserted rectangle and its identifier.
        const LEAF_ELEMENT = 0b0000_0001;
        /// Structural level-0 node whose children are all leaf elements.
        const LEAF_NODE    = 0b0000_0010;
    }
}

/// A node of the tree.
///
/// Structural nodes own their children exclusively; there are no parent
/// links. A leaf element sits at [`Node::ELEMENT_LEVEL`], structural leaf
/// nodes at level 0, and each level above adds one.
#[derive(Clone, Debug)]
pub struct Node<T, I, const D: usize> {
    pub(crate) level: i32,
    pub(crate) rect: Rect<T, D>,
    pub(crate) children: Vec<Self>,
    pub(crate) flags: NodeFlags,
    pub(crate) id: Option<I>,
}

impl<T, I, const D: usize> Node<T, I, D> {
    /// Level sentinel of leaf elements; not a structural level.
    pub const ELEMENT_LEVEL: i32 = -1;

    /// Wrap a rectangle and its identifier as a leaf element.
    pub const fn element(rect: Rect<T, D>, id: I) -> Self {
        Self {
            level: Self::ELEMENT_LEVEL,
            rect,
            children: Vec::new(),
            flags: NodeFlags::LEAF_ELEMENT,
            id: Some(id),
        }
    }

    /// Level of this node: `-1` for leaf elements, `0` for structural leaves.
    pub const fn level(&self) -> i32 {
        self.level
    }

    /// Bounding rectangle; for leaf elements, the inserted rectangle itself.
    pub const fn rect(&self) -> &Rect<T, D> {
        &self.rect
    }

    /// Child nodes in insertion/split order. Empty for leaf elements.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Structural flags.
    pub const fn flags(&self) -> NodeFlags {
        self.flags
    }

    /// Identifier of a leaf element; `None` for structural nodes.
    pub const fn id(&self) -> Option<&I> {
        self.id.as_ref()
    }

    /// Whether this is a terminal leaf element.
    pub const fn is_leaf_element(&self) -> bool {
        self.flags.contains(NodeFlags::LEAF_ELEMENT)
    }

    /// Whether this is a structural level-0 node.
    pub const fn is_leaf_node(&self) -> bool {
        self.flags.contains(NodeFlags::LEAF_NODE)
    }

    /// Number of leaf elements stored under this node (itself, if it is one).
    pub fn element_count(&self) -> usize {
        if self.is_leaf_element() {
            1
        } else {
            self.children.iter().map(Self::element_count).sum()
        }
    }

    const fn flags_for_level(level: i32) -> NodeFlags {
        if level == 0 {
            NodeFlags::LEAF_NODE
        } else {
            NodeFlags::empty()
        }
    }
}

impl<T: Scalar, I, const D: usize> Node<T, I, D> {
    /// Create a structural node at `level` (>= 0) owning `children`.
    ///
    /// The bounding rectangle is the union of the children's rectangles, or
    /// [`Rect::empty`] when there are none.
    ///
    /// # Panics
    ///
    /// Panics if `level` is negative.
    pub fn with_children(level: i32, children: Vec<Self>) -> Self {
        assert!(
            level >= 0,
            "structural nodes need a non-negative level, got {level}"
        );
        let rect = children
            .iter()
            .fold(Rect::empty(), |acc, c| union(&acc, &c.rect));
        Self {
            level,
            rect,
            children,
            flags: Self::flags_for_level(level),
            id: None,
        }
    }

    /// An empty structural node at `level`.
    pub(crate) fn empty_at(level: i32) -> Self {
        Self {
            level,
            rect: Rect::empty(),
            children: Vec::new(),
            flags: Self::flags_for_level(level),
            id: None,
        }
    }
}
