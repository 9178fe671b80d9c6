//! Hound selection.

use tracing::debug;

use crate::core::{MatchState, Occupant, Position, Side};
use crate::rules::{apply_move, legal_destinations, Destinations, Move, RuleError};

/// The Hound the human has picked up, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoundsController {
    selected: Option<Position>,
}

impl HoundsController {
    /// Create a controller with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected Hound.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Drop the current selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Handle a click on a piece.
    ///
    /// Selects the node if it holds a Hound and the Hounds are on move in a
    /// running match; any other click clears the selection. Returns whether
    /// a piece is now selected.
    pub fn select_piece(&mut self, state: &MatchState, position: Position) -> bool {
        let selectable = !state.is_terminal()
            && state.turn() == Side::Hounds
            && state.board().occupant(position) == Occupant::Hound;

        self.selected = selectable.then_some(position);
        selectable
    }

    /// Nodes to highlight for the selected Hound.
    #[must_use]
    pub fn highlighted(&self, state: &MatchState) -> Destinations {
        match self.selected {
            Some(from) => legal_destinations(state.board(), from),
            None => Destinations::new(),
        }
    }

    /// Handle a click on a board node.
    ///
    /// Ignored (`None`) unless a Hound is selected and the node is one of
    /// its legal destinations. Otherwise applies the move and clears the
    /// selection.
    pub fn target(
        &mut self,
        state: &MatchState,
        position: Position,
    ) -> Option<Result<MatchState, RuleError>> {
        let from = self.selected?;
        if !self.highlighted(state).contains(&position) {
            debug!(from = %from, to = %position, "ignoring target outside legal set");
            return None;
        }

        self.selected = None;
        Some(apply_move(state, Move::new(from, position)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    fn pos(id: u8) -> Position {
        Position::new(id).unwrap()
    }

    #[test]
    fn test_select_hound() {
        let state = MatchState::new();
        let mut controller = HoundsController::new();

        assert!(controller.select_piece(&state, pos(9)));
        assert_eq!(controller.selected(), Some(pos(9)));
        assert_eq!(controller.highlighted(&state).as_slice(), &[pos(5), pos(6)]);
    }

    #[test]
    fn test_select_non_hound_clears() {
        let state = MatchState::new();
        let mut controller = HoundsController::new();
        controller.select_piece(&state, pos(9));

        assert!(!controller.select_piece(&state, pos(0)));
        assert_eq!(controller.selected(), None);
        assert!(controller.highlighted(&state).is_empty());
    }

    #[test]
    fn test_select_refused_on_hare_turn() {
        let state = MatchState::from_position(crate::core::INITIAL_BOARD, Side::Hare);
        let mut controller = HoundsController::new();
        assert!(!controller.select_piece(&state, pos(8)));
    }

    #[test]
    fn test_select_refused_after_game_over() {
        let board = Board::from_pieces(pos(10), [pos(4), pos(5), pos(6)]).unwrap();
        let state = MatchState::from_position(board, Side::Hounds);
        let mut controller = HoundsController::new();
        assert!(!controller.select_piece(&state, pos(5)));
    }

    #[test]
    fn test_target_applies_move() {
        let state = MatchState::new();
        let mut controller = HoundsController::new();
        controller.select_piece(&state, pos(10));

        let next = controller.target(&state, pos(7)).unwrap().unwrap();
        assert_eq!(next.board().occupant(pos(7)), Occupant::Hound);
        assert_eq!(next.turn(), Side::Hare);
        assert_eq!(controller.selected(), None);
    }

    #[test]
    fn test_target_outside_set_ignored() {
        let state = MatchState::new();
        let mut controller = HoundsController::new();

        // Nothing selected
        assert!(controller.target(&state, pos(5)).is_none());

        controller.select_piece(&state, pos(10));
        assert!(controller.target(&state, pos(5)).is_none());
        // Selection survives an ignored click
        assert_eq!(controller.selected(), Some(pos(10)));
    }
}
