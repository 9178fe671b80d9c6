//! Save-file record.
//!
//! ## Format
//!
//! ```json
//! {
//!   "board": [{"id": 0, "piece": "HARE"}, {"id": 1, "piece": null}, ...],
//!   "currentTurn": "HOUNDS",
//!   "status": "PLAYING",
//!   "level": 1,
//!   "difficulty": "Easy",
//!   "history": [[...board...], ...],
//!   "isHareVisible": true,
//!   "trackCharges": 3,
//!   "forcedReveal": false,
//!   "config": {"tracking_charges": 3, "total_levels": 10}
//! }
//! ```
//!
//! Only `board` and `currentTurn` are required. Older saves lack
//! `isHareVisible`, `trackCharges`, `forcedReveal` and `config`; unknown
//! fields are ignored.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{
    Board, Difficulty, GamePhase, MatchConfig, MatchState, Occupant, Position, Side, NODE_COUNT,
};
use crate::history::History;
use crate::rules::evaluate_phase;

use super::error::PersistenceError;

/// Piece on a saved slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SavedPiece {
    Hare,
    Hound,
}

/// One saved board slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSlot {
    pub id: i64,
    #[serde(default)]
    pub piece: Option<SavedPiece>,
}

/// Saved side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SavedTurn {
    Hounds,
    Hare,
}

/// Saved match status. `Paused` is accepted and loads as in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SavedStatus {
    #[default]
    Playing,
    HoundsWin,
    HareWin,
    Paused,
}

/// A saved match, as stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedMatch {
    pub board: Vec<SavedSlot>,
    pub current_turn: SavedTurn,
    #[serde(default)]
    pub status: SavedStatus,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub history: Option<Vec<Vec<SavedSlot>>>,
    #[serde(default)]
    pub is_hare_visible: Option<bool>,
    #[serde(default)]
    pub track_charges: Option<u32>,
    #[serde(default)]
    pub forced_reveal: Option<bool>,
    #[serde(default)]
    pub config: Option<MatchConfig>,
}

impl From<Side> for SavedTurn {
    fn from(side: Side) -> Self {
        match side {
            Side::Hounds => SavedTurn::Hounds,
            Side::Hare => SavedTurn::Hare,
        }
    }
}

impl From<SavedTurn> for Side {
    fn from(turn: SavedTurn) -> Self {
        match turn {
            SavedTurn::Hounds => Side::Hounds,
            SavedTurn::Hare => Side::Hare,
        }
    }
}

impl From<GamePhase> for SavedStatus {
    fn from(phase: GamePhase) -> Self {
        match phase {
            GamePhase::InProgress => SavedStatus::Playing,
            GamePhase::HoundsWon => SavedStatus::HoundsWin,
            GamePhase::HareWon => SavedStatus::HareWin,
        }
    }
}

impl SavedStatus {
    fn phase(self) -> GamePhase {
        match self {
            SavedStatus::Playing | SavedStatus::Paused => GamePhase::InProgress,
            SavedStatus::HoundsWin => GamePhase::HoundsWon,
            SavedStatus::HareWin => GamePhase::HareWon,
        }
    }
}

/// Encode a board as saved slots.
#[must_use]
pub fn board_to_slots(board: &Board) -> Vec<SavedSlot> {
    Position::ALL
        .iter()
        .map(|&p| SavedSlot {
            id: i64::from(p.id()),
            piece: match board.occupant(p) {
                Occupant::Empty => None,
                Occupant::Hare => Some(SavedPiece::Hare),
                Occupant::Hound => Some(SavedPiece::Hound),
            },
        })
        .collect()
}

/// Decode saved slots into a board.
///
/// Slots may come in any order but must name every node exactly once.
///
/// # Errors
///
/// Any [`PersistenceError`] board variant.
pub fn slots_to_board(slots: &[SavedSlot]) -> Result<Board, PersistenceError> {
    let mut occupants: [Option<Occupant>; NODE_COUNT] = [None; NODE_COUNT];

    for slot in slots {
        let position = u8::try_from(slot.id)
            .ok()
            .and_then(Position::new)
            .ok_or(PersistenceError::UnknownNode(slot.id))?;

        let occupant = match slot.piece {
            None => Occupant::Empty,
            Some(SavedPiece::Hare) => Occupant::Hare,
            Some(SavedPiece::Hound) => Occupant::Hound,
        };

        if occupants[position.index()].replace(occupant).is_some() {
            return Err(PersistenceError::DuplicateNode(position.id()));
        }
    }

    let mut filled = [Occupant::Empty; NODE_COUNT];
    for position in Position::ALL {
        filled[position.index()] =
            occupants[position.index()].ok_or(PersistenceError::MissingNode(position.id()))?;
    }

    Ok(Board::try_from(filled)?)
}

impl SavedMatch {
    /// Capture a match for saving.
    #[must_use]
    pub fn from_state(state: &MatchState) -> Self {
        Self {
            board: board_to_slots(state.board()),
            current_turn: state.turn().into(),
            status: state.phase().into(),
            level: Some(state.level()),
            difficulty: Some(state.difficulty()),
            history: Some(state.history().iter().map(board_to_slots).collect()),
            is_hare_visible: Some(state.is_hare_visible()),
            track_charges: Some(state.tracking_charges()),
            forced_reveal: Some(state.forced_reveal()),
            config: Some(state.config().clone()),
        }
    }

    /// Rebuild a match, filling fields older saves lack.
    ///
    /// ## Defaults
    ///
    /// - `isHareVisible`: `true`
    /// - `trackCharges`: the config's starting charges
    /// - `forcedReveal`: `false`
    /// - `config`: [`MatchConfig::default`]
    /// - `level`: 1, `difficulty`: derived from level
    /// - `history`: just the current board
    ///
    /// A stored forced reveal is dropped if the match is already over.
    ///
    /// The phase is re-evaluated from the board; a stored status that
    /// disagrees is logged and ignored.
    ///
    /// # Errors
    ///
    /// [`PersistenceError`] if any board is invalid or the history does not
    /// end at the current board.
    pub fn into_state(self) -> Result<MatchState, PersistenceError> {
        let board = slots_to_board(&self.board)?;

        let history = match &self.history {
            Some(boards) if !boards.is_empty() => {
                let boards = boards
                    .iter()
                    .map(|slots| slots_to_board(slots))
                    .collect::<Result<Vec<_>, _>>()?;
                History::from_boards(boards).ok_or(PersistenceError::HistoryMismatch)?
            }
            _ => History::new(board),
        };
        if history.last() != &board {
            return Err(PersistenceError::HistoryMismatch);
        }

        let turn = Side::from(self.current_turn);
        let phase = evaluate_phase(&board, turn);
        if phase != self.status.phase() {
            warn!(stored = ?self.status, evaluated = ?phase, "saved status disagrees with board");
        }

        let config = self.config.unwrap_or_default();
        let mut state = MatchState::with_config(config, self.level.unwrap_or(1));
        if let Some(difficulty) = self.difficulty {
            state.difficulty = difficulty;
        }
        state.board = board;
        state.turn = turn;
        state.phase = phase;
        state.history = history;
        state.hare_visible = self.is_hare_visible.unwrap_or(true);
        if let Some(charges) = self.track_charges {
            state.tracking_charges = charges;
        }
        state.forced_reveal = self.forced_reveal.unwrap_or(false) && !phase.is_terminal();
        Ok(state)
    }
}

impl TryFrom<SavedMatch> for MatchState {
    type Error = PersistenceError;

    fn try_from(saved: SavedMatch) -> Result<Self, Self::Error> {
        saved.into_state()
    }
}
