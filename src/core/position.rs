//! Board topology: node identifiers and the fixed adjacency graph.
//!
//! ## Layout
//!
//! The board is an hourglass of 11 nodes. The Hare starts on node 0 and
//! tries to reach node 10; the Hounds start on the back rank `{8, 9, 10}`.
//!
//! ```text
//!        1 --- 4 --- 7
//!      / | \   |   / | \
//!     0 -2---- 5 --- 8 - 10
//!      \ | /   |   \ | /
//!        3 --- 6 --- 9
//! ```
//!
//! Node 5 is the hub (eight neighbours); nodes 0 and 10 have three.
//! The table below is the single source of truth for adjacency.

use serde::{Deserialize, Serialize};

/// Number of nodes on the board.
pub const NODE_COUNT: usize = 11;

/// Neighbours of every node, indexed by node id. Undirected.
const ADJACENCY: [&[u8]; NODE_COUNT] = [
    &[1, 2, 3],
    &[0, 2, 4, 5],
    &[0, 1, 3, 5],
    &[0, 2, 5, 6],
    &[1, 5, 7],
    &[1, 2, 3, 4, 6, 7, 8, 9],
    &[3, 5, 9],
    &[4, 5, 8, 10],
    &[5, 7, 9, 10],
    &[5, 6, 8, 10],
    &[7, 8, 9],
];

/// The Hounds' starting row, where sideways moves are allowed.
pub const BACK_RANK: [Position; 4] = [Position(7), Position(8), Position(9), Position(10)];

/// The node the Hare must reach to win.
pub const HARE_GOAL: Position = Position(10);

/// A node of the board graph (`0..=10`).
///
/// Only constructed through [`Position::new`] or the constants in this
/// module, so every value indexes the adjacency table safely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// All nodes in ascending order.
    pub const ALL: [Position; NODE_COUNT] = [
        Position(0),
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
        Position(9),
        Position(10),
    ];

    /// Create a position, or `None` if `id` is not a board node.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < NODE_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw node id.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Get the node id as a slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the neighbours of this node.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        ADJACENCY[self.index()].iter().map(|&id| Position(id))
    }

    /// Number of neighbours of this node.
    #[must_use]
    pub fn degree(self) -> usize {
        ADJACENCY[self.index()].len()
    }

    /// Check whether `other` shares an edge with this node.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        ADJACENCY[self.index()].contains(&other.0)
    }

    /// Check whether this node is on the Hounds' back rank.
    #[must_use]
    pub fn is_back_rank(self) -> bool {
        BACK_RANK.contains(&self)
    }
}

impl TryFrom<u8> for Position {
    type Error = InvalidPosition;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Position::new(id).ok_or(InvalidPosition(id))
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node id outside `0..=10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("node {0} is not on the board")]
pub struct InvalidPosition(pub u8);
