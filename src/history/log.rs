//! Append-only log of board snapshots.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Board;

/// Board snapshots of a match, oldest first.
///
/// Never empty: entry 0 is the starting board and each applied move
/// appends exactly one entry. Backed by `im::Vector`, so cloning a
/// history (and therefore a whole match state) is O(1) and entries can
/// never be mutated through another snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Board>", into = "Vec<Board>")]
pub struct History {
    boards: Vector<Board>,
}

impl History {
    /// Start a history at the given board.
    #[must_use]
    pub fn new(start: Board) -> Self {
        Self {
            boards: Vector::unit(start),
        }
    }

    /// Build a history from boards, oldest first. `None` if empty.
    #[must_use]
    pub fn from_boards(boards: impl IntoIterator<Item = Board>) -> Option<Self> {
        let boards: Vector<Board> = boards.into_iter().collect();
        (!boards.is_empty()).then_some(Self { boards })
    }

    /// Number of snapshots (applied moves + 1).
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Number of moves applied since the start.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.boards.len() - 1
    }

    /// The starting board.
    #[must_use]
    pub fn start(&self) -> &Board {
        &self.boards[0]
    }

    /// The most recent board.
    #[must_use]
    pub fn last(&self) -> &Board {
        &self.boards[self.boards.len() - 1]
    }

    /// Get a snapshot by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Iterate over snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    /// Return a new history with `board` appended.
    #[must_use]
    pub fn pushed(&self, board: Board) -> Self {
        let mut boards = self.boards.clone();
        boards.push_back(board);
        Self { boards }
    }

    /// Return a new history with the last `plies` entries dropped.
    ///
    /// `None` if that would remove the starting board.
    #[must_use]
    pub fn rewound(&self, plies: usize) -> Option<Self> {
        if plies >= self.boards.len() {
            return None;
        }
        Some(Self {
            boards: self.boards.take(self.boards.len() - plies),
        })
    }
}

impl TryFrom<Vec<Board>> for History {
    type Error = EmptyHistory;

    fn try_from(boards: Vec<Board>) -> Result<Self, Self::Error> {
        History::from_boards(boards).ok_or(EmptyHistory)
    }
}

impl From<History> for Vec<Board> {
    fn from(history: History) -> Self {
        history.boards.into_iter().collect()
    }
}

/// A history with no starting board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("history must contain at least the starting board")]
pub struct EmptyHistory;
