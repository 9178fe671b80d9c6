//! Match state: the single value every engine operation consumes and returns.
//!
//! ## Ownership
//!
//! Engine operations take `&MatchState` and return a fresh `MatchState`;
//! nothing is mutated in place. Callers "advance" a match by replacing their
//! reference. Cloning is cheap because the history is an `im::Vector` and
//! boards are `Copy`.
//!
//! ## Visibility
//!
//! `hare_visible` is derived from the board after every move. The
//! `forced_reveal` flag is set by the tracking action and cleared by the
//! next move; neither affects legality or win evaluation.

use serde::{Deserialize, Serialize};

use super::board::{Board, INITIAL_BOARD};
use super::config::{Difficulty, MatchConfig};
use super::side::Side;
use crate::history::History;
use crate::rules::{evaluate_phase, is_hare_visible};

/// Progress of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    InProgress,
    HoundsWon,
    HareWon,
}

impl GamePhase {
    /// Check if the match has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GamePhase::InProgress
    }

    /// The winning side, if any.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            GamePhase::InProgress => None,
            GamePhase::HoundsWon => Some(Side::Hounds),
            GamePhase::HareWon => Some(Side::Hare),
        }
    }
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchState {
    pub(crate) board: Board,
    pub(crate) turn: Side,
    pub(crate) phase: GamePhase,
    pub(crate) history: History,
    pub(crate) tracking_charges: u32,
    pub(crate) hare_visible: bool,
    pub(crate) forced_reveal: bool,
    pub(crate) level: u32,
    pub(crate) difficulty: Difficulty,
    pub(crate) config: MatchConfig,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Start a level-1 match with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MatchConfig::default(), 1)
    }

    /// Start a match at the given campaign level.
    #[must_use]
    pub fn new_game(level: u32) -> Self {
        Self::with_config(MatchConfig::default(), level)
    }

    /// Start a match with a custom configuration.
    ///
    /// ## Defaults
    ///
    /// - Hounds move first from the initial board
    /// - The Hare starts disclosed: its starting node is public
    /// - `level` is clamped into the configured range
    #[must_use]
    pub fn with_config(config: MatchConfig, level: u32) -> Self {
        let level = config.clamp_level(level);

        Self {
            board: INITIAL_BOARD,
            turn: Side::Hounds,
            phase: GamePhase::InProgress,
            history: History::new(INITIAL_BOARD),
            tracking_charges: config.tracking_charges,
            hare_visible: true,
            forced_reveal: false,
            level,
            difficulty: Difficulty::for_level(level),
            config,
        }
    }

    /// Start a match from an arbitrary position.
    ///
    /// The position becomes the history's starting board. Phase and
    /// visibility are evaluated on it, so a position with the Hare already
    /// home starts as `HareWon`.
    #[must_use]
    pub fn from_position(board: Board, turn: Side) -> Self {
        let mut state = Self::new();
        state.board = board;
        state.turn = turn;
        state.phase = evaluate_phase(&board, turn);
        state.history = History::new(board);
        state.hare_visible = is_hare_visible(&board);
        state
    }

    /// Start the next campaign level (capped at the last level).
    #[must_use]
    pub fn next_level(&self) -> Self {
        Self::with_config(self.config.clone(), self.level.saturating_add(1))
    }

    /// Start this level over.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::with_config(self.config.clone(), self.level)
    }

    // === Accessors ===

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Match progress.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Board snapshots since the start.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Tracking charges left.
    #[must_use]
    pub fn tracking_charges(&self) -> u32 {
        self.tracking_charges
    }

    /// True visibility: is a Hound adjacent to the Hare?
    #[must_use]
    pub fn is_hare_visible(&self) -> bool {
        self.hare_visible
    }

    /// Is a tracking reveal active until the next move?
    #[must_use]
    pub fn forced_reveal(&self) -> bool {
        self.forced_reveal
    }

    /// What the renderer and oracle are told about the Hare's visibility.
    #[must_use]
    pub fn disclosed_visibility(&self) -> bool {
        self.hare_visible || self.forced_reveal
    }

    /// Campaign level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Oracle skill tag for this level.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Configuration this match was started with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Check if the match has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Whether an undo button should be offered to the human.
    ///
    /// Stricter than [`undo`](crate::history::undo), which also rewinds
    /// finished matches.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.is_terminal() && crate::history::undo_available(self)
    }
}
