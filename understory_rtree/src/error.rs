// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while building a tree configuration or a rectangle.
//!
//! Insertion itself never fails: malformed rectangles are accepted and only
//! skew the geometric heuristics.

/// Error type for fallible constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The fan-out bounds cannot describe a tree.
    #[error("invalid fan-out: max_nodes = {max}, min_nodes = {min} (need max >= 2 and 1 <= min <= max)")]
    InvalidFanout {
        /// Requested maximum number of children per node.
        max: usize,
        /// Requested minimum number of children per node.
        min: usize,
    },
    /// Guttman minimum fill was requested with `2 * min > max + 1`.
    #[error("min_nodes = {min} cannot be guaranteed for both halves of a split with max_nodes = {max}")]
    UnsatisfiableMinFill {
        /// Maximum number of children per node.
        max: usize,
        /// Minimum number of children per node.
        min: usize,
    },
    /// A coordinate slice did not hold exactly `2 * D` values.
    #[error("expected {expected} coordinates, found {found}")]
    CoordinateCount {
        /// Number of coordinates required, `2 * D`.
        expected: usize,
        /// Number of coordinates supplied.
        found: usize,
    },
}
