//! Fog of war.
//!
//! The Hare is visible exactly when a Hound stands on a neighbouring node.
//! A tracking charge can force a reveal for one move; the reveal only
//! changes what is disclosed, never what is legal.

use tracing::debug;

use crate::core::{Board, MatchState, Occupant};

use super::error::RuleError;

/// Check whether any Hound is adjacent to the Hare.
#[must_use]
pub fn is_hare_visible(board: &Board) -> bool {
    board
        .hare()
        .neighbors()
        .any(|p| board.occupant(p) == Occupant::Hound)
}

/// Spend a tracking charge to reveal the Hare until the next move.
///
/// # Errors
///
/// - [`RuleError::GameOver`] if the match has ended
/// - [`RuleError::NoTrackingCharges`] if no charges remain
/// - [`RuleError::AlreadyDisclosed`] if the Hare is visible or already revealed
pub fn track_hare(state: &MatchState) -> Result<MatchState, RuleError> {
    if state.is_terminal() {
        return Err(RuleError::GameOver);
    }
    if state.tracking_charges == 0 {
        return Err(RuleError::NoTrackingCharges);
    }
    if state.disclosed_visibility() {
        return Err(RuleError::AlreadyDisclosed);
    }

    let mut next = state.clone();
    next.tracking_charges -= 1;
    next.forced_reveal = true;

    debug!(charges_left = next.tracking_charges, hare = %next.board.hare(), "hare tracked");
    Ok(next)
}
