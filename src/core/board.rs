//! Board occupancy.
//!
//! A `Board` is a plain `Copy` value: 11 slots, one occupant each.
//! Applying a move produces a new board, so history snapshots are
//! independent by construction.

use serde::{Deserialize, Serialize};

use super::position::{Position, NODE_COUNT};

/// Number of Hounds on every valid board.
pub const HOUND_COUNT: usize = 3;

/// What sits on a board slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Hare,
    Hound,
}

impl Occupant {
    /// Check if the slot holds a piece.
    #[must_use]
    pub fn is_piece(self) -> bool {
        self != Occupant::Empty
    }
}

/// Occupancy of all 11 nodes.
///
/// Invariant: exactly one Hare and [`HOUND_COUNT`] Hounds. Boards are only
/// built from the initial template, [`Board::from_pieces`] (checked), or by
/// moving a piece of an existing board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Occupant; 11]", into = "[Occupant; 11]")]
pub struct Board {
    slots: [Occupant; NODE_COUNT],
}

/// Starting layout: Hare on 0, Hounds on 8, 9 and 10.
pub const INITIAL_BOARD: Board = {
    let mut slots = [Occupant::Empty; NODE_COUNT];
    slots[0] = Occupant::Hare;
    slots[8] = Occupant::Hound;
    slots[9] = Occupant::Hound;
    slots[10] = Occupant::Hound;
    Board { slots }
};

impl Default for Board {
    fn default() -> Self {
        INITIAL_BOARD
    }
}

impl Board {
    /// Build a board from piece positions.
    ///
    /// Returns `None` if any two pieces share a node.
    #[must_use]
    pub fn from_pieces(hare: Position, hounds: [Position; HOUND_COUNT]) -> Option<Self> {
        let mut slots = [Occupant::Empty; NODE_COUNT];
        slots[hare.index()] = Occupant::Hare;

        for hound in hounds {
            if slots[hound.index()].is_piece() {
                return None;
            }
            slots[hound.index()] = Occupant::Hound;
        }

        Some(Self { slots })
    }

    /// Build a board from raw slots, checking the piece-count invariant.
    #[must_use]
    pub fn from_slots(slots: [Occupant; NODE_COUNT]) -> Option<Self> {
        let board = Self { slots };
        board.is_well_formed().then_some(board)
    }

    /// Get the occupant of a node.
    #[must_use]
    pub fn occupant(&self, position: Position) -> Occupant {
        self.slots[position.index()]
    }

    /// Check if a node is empty.
    #[must_use]
    pub fn is_empty(&self, position: Position) -> bool {
        self.occupant(position) == Occupant::Empty
    }

    /// Get all slots in node order.
    #[must_use]
    pub fn slots(&self) -> &[Occupant; NODE_COUNT] {
        &self.slots
    }

    /// Node currently holding the Hare.
    #[must_use]
    pub fn hare(&self) -> Position {
        debug_assert!(self.is_well_formed(), "board without exactly one hare: {self}");
        self.positions_of(Occupant::Hare)
            .next()
            .unwrap_or(Position::ALL[0])
    }

    /// Nodes currently holding Hounds, ascending.
    pub fn hounds(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions_of(Occupant::Hound)
    }

    /// Nodes holding the given occupant, ascending.
    pub fn positions_of(&self, occupant: Occupant) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&p| self.occupant(p) == occupant)
    }

    /// Count slots holding the given occupant.
    #[must_use]
    pub fn count(&self, occupant: Occupant) -> usize {
        self.slots.iter().filter(|&&o| o == occupant).count()
    }

    /// Check the piece-count invariant: one Hare, three Hounds.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.count(Occupant::Hare) == 1 && self.count(Occupant::Hound) == HOUND_COUNT
    }

    /// Return a new board with the piece on `from` moved to `to`.
    ///
    /// Performs no legality check; callers go through
    /// [`apply_move`](crate::rules::apply_move).
    #[must_use]
    pub(crate) fn with_move(&self, from: Position, to: Position) -> Self {
        let mut slots = self.slots;
        slots[to.index()] = slots[from.index()];
        slots[from.index()] = Occupant::Empty;

        let board = Self { slots };
        debug_assert!(board.is_well_formed(), "move {from}->{to} broke piece counts");
        board
    }
}

impl TryFrom<[Occupant; NODE_COUNT]> for Board {
    type Error = MalformedBoard;

    fn try_from(slots: [Occupant; NODE_COUNT]) -> Result<Self, Self::Error> {
        Board::from_slots(slots).ok_or(MalformedBoard)
    }
}

impl From<Board> for [Occupant; NODE_COUNT] {
    fn from(board: Board) -> Self {
        board.slots
    }
}

/// Slots that do not hold exactly one Hare and three Hounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("board must hold one hare and three hounds")]
pub struct MalformedBoard;

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in &self.slots {
            let c = match slot {
                Occupant::Empty => '.',
                Occupant::Hare => 'R',
                Occupant::Hound => 'H',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
