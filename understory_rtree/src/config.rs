// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree configuration fixed at construction time.

use crate::error::Error;

/// How a node split treats the minimum fan-out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MinFill {
    /// `min_nodes` is recorded but never enforced; a split group may hold a single child.
    #[default]
    Unenforced,
    /// Guttman's rule: once a group needs every remaining child to reach
    /// `min_nodes`, all of them are assigned to it. Both halves of every split
    /// then hold at least `min_nodes` children, which requires
    /// `2 * min_nodes <= max_nodes + 1` (see [`Fanout::with_min_fill`]).
    Guttman,
}

/// Fan-out bounds for tree nodes.
///
/// A node holds at most `max_nodes` children; inserting one more triggers a split.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fanout {
    max_nodes: usize,
    min_nodes: usize,
    min_fill: MinFill,
}

impl Fanout {
    /// Create fan-out bounds with [`MinFill::Unenforced`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFanout`] unless `max_nodes >= 2` and
    /// `1 <= min_nodes <= max_nodes`.
    pub const fn new(max_nodes: usize, min_nodes: usize) -> Result<Self, Error> {
        if max_nodes < 2 || min_nodes == 0 || min_nodes > max_nodes {
            return Err(Error::InvalidFanout {
                max: max_nodes,
                min: min_nodes,
            });
        }
        Ok(Self {
            max_nodes,
            min_nodes,
            min_fill: MinFill::Unenforced,
        })
    }

    /// Return a copy using the given minimum-fill policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsatisfiableMinFill`] when `min_fill` is
    /// [`MinFill::Guttman`] and `2 * min_nodes > max_nodes + 1`: the
    /// `max_nodes + 1` children of an overflowing node cannot fill two groups.
    pub const fn with_min_fill(self, min_fill: MinFill) -> Result<Self, Error> {
        let guttman = matches!(min_fill, MinFill::Guttman);
        // 2 * min > max + 1, rearranged so it cannot overflow.
        if guttman && self.min_nodes - 1 > self.max_nodes - self.min_nodes {
            return Err(Error::UnsatisfiableMinFill {
                max: self.max_nodes,
                min: self.min_nodes,
            });
        }
        Ok(Self { min_fill, ..self })
    }

    /// Maximum number of children per node.
    pub const fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Minimum number of children per node (only honored under [`MinFill::Guttman`]).
    pub const fn min_nodes(&self) -> usize {
        self.min_nodes
    }

    /// The minimum-fill policy applied by splits.
    pub const fn min_fill(&self) -> MinFill {
        self.min_fill
    }
}

impl Default for Fanout {
    fn default() -> Self {
        Self {
            max_nodes: 8,
            min_nodes: 4,
            min_fill: MinFill::Unenforced,
        }
    }
}
