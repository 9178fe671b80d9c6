//! Turn and win state machine.
//!
//! ```text
//! InProgress --move--> InProgress | HoundsWon | HareWon
//! ```
//!
//! Both win states are terminal; only [`undo`](crate::history::undo) or a
//! new match leaves them.
//!
//! ## Win evaluation
//!
//! After every move, on the new board and with the new side to move:
//! 1. Hare on node 10 -> `HareWon`, whoever moves next.
//! 2. Otherwise, Hare to move with no legal destination -> `HoundsWon`.
//!
//! Immobile Hounds never end the match, and there is no draw.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, GamePhase, MatchState, Position, Side, HARE_GOAL};

use super::error::RuleError;
use super::legality::{hare_destinations, legal_destinations};
use super::visibility::is_hare_visible;

/// A single step of one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Node the piece leaves.
    pub from: Position,
    /// Node the piece lands on.
    pub to: Position,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Evaluate win conditions for a board with `to_move` on move.
#[must_use]
pub fn evaluate_phase(board: &Board, to_move: Side) -> GamePhase {
    if board.hare() == HARE_GOAL {
        return GamePhase::HareWon;
    }
    if to_move == Side::Hare && hare_destinations(board).is_empty() {
        return GamePhase::HoundsWon;
    }
    GamePhase::InProgress
}

/// All legal moves for the side on move. Empty once the match is over.
#[must_use]
pub fn legal_moves(state: &MatchState) -> Vec<Move> {
    if state.is_terminal() {
        return Vec::new();
    }

    let board = state.board();
    board
        .positions_of(state.turn().piece())
        .flat_map(|from| {
            legal_destinations(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Apply a move and return the resulting state.
///
/// Appends the new board to history, passes the turn, recomputes
/// visibility, clears any forced reveal and evaluates win conditions.
///
/// # Errors
///
/// Rejects, without touching `state`:
/// - [`RuleError::GameOver`] once the match has been won
/// - [`RuleError::EmptySource`] if `from` is empty
/// - [`RuleError::NotYourTurn`] if `from` holds the other side's piece
/// - [`RuleError::IllegalDestination`] if `to` is not a legal destination
pub fn apply_move(state: &MatchState, mv: Move) -> Result<MatchState, RuleError> {
    if state.is_terminal() {
        return Err(RuleError::GameOver);
    }

    let board = state.board();
    let piece = board.occupant(mv.from);
    if !piece.is_piece() {
        return Err(RuleError::EmptySource(mv.from));
    }
    if !state.turn().owns(piece) {
        return Err(RuleError::NotYourTurn { expected: state.turn() });
    }
    if !legal_destinations(board, mv.from).contains(&mv.to) {
        return Err(RuleError::IllegalDestination { from: mv.from, to: mv.to });
    }

    let new_board = board.with_move(mv.from, mv.to);
    let next_turn = state.turn().opponent();

    let mut next = state.clone();
    next.board = new_board;
    next.history = state.history().pushed(new_board);
    next.turn = next_turn;
    next.hare_visible = is_hare_visible(&new_board);
    next.forced_reveal = false;
    next.phase = evaluate_phase(&new_board, next_turn);

    debug!(
        side = %state.turn(),
        mv = %mv,
        board = %new_board,
        phase = ?next.phase,
        "move applied"
    );
    Ok(next)
}

impl MatchState {
    /// Legal destinations of the piece on `position`.
    #[must_use]
    pub fn legal_destinations(&self, position: Position) -> super::Destinations {
        legal_destinations(self.board(), position)
    }

    /// See [`legal_moves`].
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    /// See [`apply_move`].
    pub fn apply_move(&self, mv: Move) -> Result<MatchState, RuleError> {
        apply_move(self, mv)
    }
}
