//! Caller-contract violations.
//!
//! Every rejected request leaves the input `MatchState` untouched; the
//! error says why so the caller can ignore the gesture or show a message.

use crate::core::{Position, Side};

/// A request the rules do not allow in the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The match has already been won.
    #[error("the match is over")]
    GameOver,

    /// The piece on `from` belongs to the side not on move.
    #[error("waiting for the {expected} to move")]
    NotYourTurn { expected: Side },

    /// There is no piece on the source node.
    #[error("no piece on node {0}")]
    EmptySource(Position),

    /// The destination is not a legal move for the piece.
    #[error("cannot move from {from} to {to}")]
    IllegalDestination { from: Position, to: Position },

    /// Undo needs a full round of history and the Hounds on move.
    #[error("nothing to undo")]
    UndoUnavailable,

    /// All tracking charges have been spent.
    #[error("no tracking charges left")]
    NoTrackingCharges,

    /// The Hare is already visible or already revealed this turn.
    #[error("the hare is already visible")]
    AlreadyDisclosed,
}
