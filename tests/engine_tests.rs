//! Full-match integration tests.
//!
//! Scripted games drive the engine through both win conditions, then check
//! undo, tracking and visibility across real move sequences.

use hare_hounds::core::{Board, GamePhase, MatchState, Occupant, Position, Side};
use hare_hounds::history::undo_available;
use hare_hounds::rules::{legal_moves, Move, RuleError};
use hare_hounds::{apply_move, track_hare, undo};

fn pos(id: u8) -> Position {
    Position::new(id).unwrap()
}

fn mv(from: u8, to: u8) -> Move {
    Move::new(pos(from), pos(to))
}

fn play(state: &MatchState, moves: &[(u8, u8)]) -> MatchState {
    moves.iter().fold(state.clone(), |s, &(from, to)| {
        apply_move(&s, mv(from, to)).unwrap_or_else(|e| panic!("{from}->{to}: {e}"))
    })
}

/// Hounds herd the Hare back to node 0 and close 1, 2, 3.
const HOUNDS_WIN: [(u8, u8); 13] = [
    (9, 6),
    (0, 2),
    (8, 5),
    (2, 0),
    (10, 7),
    (0, 2),
    (7, 4),
    (2, 0),
    (6, 3),
    (0, 2),
    (4, 1),
    (2, 0),
    (5, 2),
];

/// Hounds walk away from the back rank and the Hare slips home.
const HARE_WIN: [(u8, u8); 10] = [
    (10, 7),
    (0, 3),
    (7, 4),
    (3, 6),
    (4, 1),
    (6, 5),
    (1, 0),
    (5, 7),
    (9, 6),
    (7, 10),
];

// =============================================================================
// Win conditions
// =============================================================================

#[test]
fn test_hounds_trap_the_hare() {
    let state = play(&MatchState::new(), &HOUNDS_WIN);

    assert_eq!(state.phase(), GamePhase::HoundsWon);
    assert_eq!(state.phase().winner(), Some(Side::Hounds));
    assert_eq!(state.board().hare(), pos(0));
    assert_eq!(state.board().hounds().collect::<Vec<_>>(), vec![pos(1), pos(2), pos(3)]);
    assert_eq!(state.history().len(), HOUNDS_WIN.len() + 1);
    assert!(legal_moves(&state).is_empty());
}

#[test]
fn test_hare_reaches_goal() {
    let state = play(&MatchState::new(), &HARE_WIN);

    assert_eq!(state.phase(), GamePhase::HareWon);
    assert_eq!(state.phase().winner(), Some(Side::Hare));
    assert_eq!(state.board().hare(), pos(10));
    assert_eq!(state.turn(), Side::Hounds);
}

#[test]
fn test_no_moves_after_game_over() {
    let state = play(&MatchState::new(), &HOUNDS_WIN);

    assert_eq!(apply_move(&state, mv(0, 4)), Err(RuleError::GameOver));
    assert_eq!(apply_move(&state, mv(1, 0)), Err(RuleError::GameOver));
}

#[test]
fn test_match_stays_in_progress_until_the_end() {
    let mut state = MatchState::new();
    for &(from, to) in &HOUNDS_WIN[..HOUNDS_WIN.len() - 1] {
        state = apply_move(&state, mv(from, to)).unwrap();
        assert_eq!(state.phase(), GamePhase::InProgress, "after {from}->{to}");
    }
}

// =============================================================================
// Turn order and validation
// =============================================================================

#[test]
fn test_turns_alternate() {
    let mut state = MatchState::new();
    let mut expected = Side::Hounds;

    for &(from, to) in &HARE_WIN[..8] {
        assert_eq!(state.turn(), expected);
        state = apply_move(&state, mv(from, to)).unwrap();
        expected = expected.opponent();
    }
}

#[test]
fn test_rejected_moves_leave_state_untouched() {
    let state = MatchState::new();
    let before = state.clone();

    assert_eq!(
        apply_move(&state, mv(0, 1)),
        Err(RuleError::NotYourTurn { expected: Side::Hounds })
    );
    assert_eq!(apply_move(&state, mv(4, 1)), Err(RuleError::EmptySource(pos(4))));
    assert_eq!(
        apply_move(&state, mv(8, 4)),
        Err(RuleError::IllegalDestination { from: pos(8), to: pos(4) })
    );
    assert_eq!(state, before);
}

#[test]
fn test_hounds_never_step_back() {
    // Hound on 4 with the Hare far away
    let board = Board::from_pieces(pos(9), [pos(4), pos(0), pos(2)]).unwrap();
    let state = MatchState::from_position(board, Side::Hounds);

    assert!(apply_move(&state, mv(4, 7)).is_err());
    assert!(apply_move(&state, mv(4, 5)).is_err());
    assert!(apply_move(&state, mv(4, 1)).is_ok());
}

// =============================================================================
// Undo
// =============================================================================

#[test]
fn test_undo_rewinds_one_round() {
    let state = play(&MatchState::new(), &HARE_WIN[..4]);
    let expected = play(&MatchState::new(), &HARE_WIN[..2]);

    let undone = undo(&state).unwrap();

    assert_eq!(undone.board(), expected.board());
    assert_eq!(undone.turn(), Side::Hounds);
    assert_eq!(undone.history(), expected.history());
}

#[test]
fn test_undo_all_the_way_back() {
    let mut state = play(&MatchState::new(), &HOUNDS_WIN[..12]);
    assert_eq!(state.history().len(), 13);

    let mut undos = 0;
    while undo_available(&state) {
        state = undo(&state).unwrap();
        undos += 1;
    }

    assert_eq!(undos, 6);
    assert_eq!(state.history().len(), 1);
    assert_eq!(*state.board(), *MatchState::new().board());
    assert_eq!(undo(&state), Err(RuleError::UndoUnavailable));
}

#[test]
fn test_undo_rejected_on_hare_turn() {
    let state = play(&MatchState::new(), &HARE_WIN[..3]);
    assert_eq!(state.turn(), Side::Hare);
    assert_eq!(undo(&state), Err(RuleError::UndoUnavailable));
}

#[test]
fn test_undo_after_hare_win_reopens_match() {
    let won = play(&MatchState::new(), &HARE_WIN);
    assert!(!won.can_undo());

    let reopened = undo(&won).unwrap();
    let expected = play(&MatchState::new(), &HARE_WIN[..8]);

    assert_eq!(reopened.phase(), GamePhase::InProgress);
    assert_eq!(reopened.board(), expected.board());
    assert_eq!(reopened.turn(), Side::Hounds);
    assert!(reopened.is_hare_visible());
}

#[test]
fn test_undo_keeps_tracking_spent() {
    let state = play(&MatchState::new(), &HARE_WIN[..2]);
    let tracked = track_hare(&state).unwrap();
    let state = play(&tracked, &HARE_WIN[2..4]);

    let undone = undo(&state).unwrap();
    assert_eq!(undone.tracking_charges(), 2);
}

// =============================================================================
// Visibility and tracking
// =============================================================================

#[test]
fn test_hare_hides_when_hounds_leave() {
    let board = Board::from_pieces(pos(6), [pos(7), pos(8), pos(9)]).unwrap();
    let state = MatchState::from_position(board, Side::Hounds);
    assert!(state.is_hare_visible());

    let state = apply_move(&state, mv(9, 10)).unwrap();
    assert!(!state.is_hare_visible());
    assert!(!state.disclosed_visibility());
}

#[test]
fn test_tracking_reveals_for_one_move() {
    let board = Board::from_pieces(pos(6), [pos(7), pos(8), pos(10)]).unwrap();
    let state = MatchState::from_position(board, Side::Hounds);
    assert!(!state.is_hare_visible());

    let tracked = track_hare(&state).unwrap();
    assert!(tracked.disclosed_visibility());
    assert_eq!(tracked.tracking_charges(), 2);
    assert_eq!(track_hare(&tracked), Err(RuleError::AlreadyDisclosed));

    let moved = apply_move(&tracked, mv(10, 9)).unwrap();
    assert!(!moved.forced_reveal());
}

#[test]
fn test_tracking_runs_out() {
    let board = Board::from_pieces(pos(6), [pos(7), pos(8), pos(10)]).unwrap();
    let mut state = MatchState::from_position(board, Side::Hounds);

    // Hound slides 10 and 9 while the Hare steps 6 and 3; the Hare is
    // hidden each time the Hounds are back on move.
    let shuffle = [(10, 9), (6, 3), (9, 10), (3, 6)];
    for round in 0..3 {
        state = track_hare(&state).unwrap();
        assert_eq!(state.tracking_charges(), 2 - round);
        if round < 2 {
            state = play(&state, &shuffle[..2]);
            state = play(&state, &shuffle[2..]);
        }
    }

    assert_eq!(state.tracking_charges(), 0);
    let state = play(&state, &shuffle[..2]);
    assert_eq!(track_hare(&state), Err(RuleError::NoTrackingCharges));
}

// =============================================================================
// Board invariant
// =============================================================================

#[test]
fn test_piece_counts_hold_through_history() {
    let state = play(&MatchState::new(), &HOUNDS_WIN);

    for board in state.history().iter() {
        assert_eq!(board.count(Occupant::Hare), 1);
        assert_eq!(board.count(Occupant::Hound), 3);
        assert_eq!(board.count(Occupant::Empty), 7);
    }
}
