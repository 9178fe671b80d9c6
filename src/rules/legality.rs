//! Move legality.
//!
//! Pieces step along one edge to an empty node: no jumps, no captures.
//! Hounds may only step to a lower-numbered node, except that a Hound on the
//! back rank may also slide to any other back-rank node. The Hare may step
//! to any empty neighbour.

use smallvec::SmallVec;

use crate::core::{Board, Occupant, Position};

/// Legal destinations of one piece. Node 5 has eight neighbours, so this
/// never spills to the heap.
pub type Destinations = SmallVec<[Position; 8]>;

/// Check whether a Hound standing on `from` may ever step to `to`,
/// ignoring occupancy.
#[must_use]
pub fn hound_may_step(from: Position, to: Position) -> bool {
    to < from || (from.is_back_rank() && to.is_back_rank())
}

/// Legal destinations of the piece on `position`, in ascending node order.
///
/// Returns an empty set when the node is empty.
#[must_use]
pub fn legal_destinations(board: &Board, position: Position) -> Destinations {
    let piece = board.occupant(position);

    position
        .neighbors()
        .filter(|&to| board.is_empty(to))
        .filter(|&to| match piece {
            Occupant::Hound => hound_may_step(position, to),
            Occupant::Hare => true,
            Occupant::Empty => false,
        })
        .collect()
}

/// Check a single move against [`legal_destinations`].
#[must_use]
pub fn is_legal(board: &Board, from: Position, to: Position) -> bool {
    legal_destinations(board, from).contains(&to)
}

/// Legal destinations of the Hare.
#[must_use]
pub fn hare_destinations(board: &Board) -> Destinations {
    legal_destinations(board, board.hare())
}
