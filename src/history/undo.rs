//! Single-round rollback for the human side.
//!
//! The human plays the Hounds and the oracle answers immediately, so one
//! undo rewinds two plies: the Hare's reply and the Hounds' move before it.

use tracing::debug;

use crate::core::{GamePhase, MatchState, Side};
use crate::rules::{is_hare_visible, RuleError};

/// Plies rewound by one undo.
const UNDO_PLIES: usize = 2;

/// Check the undo precondition: a full round recorded and the Hounds on move.
#[must_use]
pub fn undo_available(state: &MatchState) -> bool {
    state.history().len() > UNDO_PLIES && state.turn() == Side::Hounds
}

/// Roll back the last Hounds move and the Hare's reply.
///
/// Restores the board from history, gives the move back to the Hounds and
/// reopens a finished match. Tracking charges and any forced reveal are
/// left as they are.
///
/// # Errors
///
/// [`RuleError::UndoUnavailable`] if fewer than three snapshots exist or the
/// Hare is on move. Nothing is rolled back in that case.
pub fn undo(state: &MatchState) -> Result<MatchState, RuleError> {
    if !undo_available(state) {
        return Err(RuleError::UndoUnavailable);
    }

    let history = state
        .history()
        .rewound(UNDO_PLIES)
        .ok_or(RuleError::UndoUnavailable)?;
    let board = *history.last();

    let mut next = state.clone();
    next.board = board;
    next.history = history;
    next.turn = Side::Hounds;
    next.phase = GamePhase::InProgress;
    next.hare_visible = is_hare_visible(&board);

    debug!(board = %board, plies = next.history.plies(), "undo");
    Ok(next)
}

impl MatchState {
    /// See [`undo`].
    pub fn undo(&self) -> Result<MatchState, RuleError> {
        undo(self)
    }
}
