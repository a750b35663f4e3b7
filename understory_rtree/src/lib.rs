// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rtree --heading-base-level=0

//! Understory R-tree: an incremental N-dimensional R-tree.
//!
//! Understory R-tree indexes axis-aligned rectangles tagged with identifiers.
//!
//! - Insert rectangles one at a time; the tree keeps every node at or below a fixed fan-out.
//! - Descent picks the child needing the least volume enlargement.
//! - Overflowing nodes are split with Guttman's quadratic split, and a root split grows the tree by one level.
//!
//! It is generic over the coordinate scalar `T`, the identifier type `I`, and the
//! dimensionality `D`. Volumes are computed in widened accumulators
//! (f32→f64, f64→f64, i32→i64, i64→i128).
//!
//! Queries and deletion are not provided. The node structure is public and
//! read-only through [`Node`] accessors and [`RTree::elements`], so they can be
//! layered on top using [`union`] and [`volume`].
//!
//! # Example
//!
//! ```rust
//! use understory_rtree::{Fanout, RTree, Rect};
//!
//! let mut tree: RTree<f64, u32, 2> = RTree::with_fanout(Fanout::new(4, 2).unwrap());
//! for i in 0..5 {
//!     let v = f64::from(i);
//!     tree.insert(Rect::new_2d(v, v, 2.0 * v, 2.0 * v), i);
//! }
//!
//! // The fifth insert overflowed the root leaf and split it.
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.root().children().len(), 2);
//! assert_eq!(tree.bounds(), &Rect::new_2d(0.0, 0.0, 8.0, 8.0));
//! ```
//!
//! Rectangles can also be built from `2 * D` ordered coordinates:
//!
//! ```rust
//! use understory_rtree::Rect;
//!
//! let r = Rect::<i64, 3>::from_coords(&[0, 0, 0, 1, 2, 3]).unwrap();
//! assert_eq!(r.volume(), 6);
//! assert!(Rect::<i64, 3>::from_coords(&[0, 0]).is_err());
//! ```
//!
//! ## Fan-out and minimum fill
//!
//! [`Fanout`] fixes `max_nodes` and `min_nodes` at construction. By default
//! `min_nodes` is recorded but not enforced, so a split may leave a group with a
//! single child. Opt into [`MinFill::Guttman`] to top up an underfull group.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events on construction, splits, root growth, and drop.
//! - `kurbo`: convert between `Rect<f64, 2>` and `kurbo::Rect`.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Inverted
//! rectangles (`min > max` on an axis) are accepted and give signed volumes.

#![no_std]

extern crate alloc;

// Diagnostic events compile away without the `tracing` feature.
macro_rules! diag {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

pub mod config;
pub mod error;
pub mod node;
pub mod select;
pub mod split;
pub mod tree;
pub mod types;

pub use config::{Fanout, MinFill};
pub use error::Error;
pub use node::{Node, NodeFlags};
pub use tree::{Elements, RTree};
pub use types::{Rect, Scalar, ScalarAcc, enlargement, union, volume};
