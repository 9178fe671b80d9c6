//! # hare-hounds
//!
//! Rules engine for Hare and Hounds, a two-player pursuit game on a fixed
//! 11-node board, with a fog-of-war twist.
//!
//! ## Rules in brief
//!
//! - Three Hounds (the human) try to trap the Hare so it cannot move.
//! - The Hare (an oracle) wins by reaching node 10.
//! - Hounds never step backward, but may slide along their back rank.
//! - The Hare is hidden unless a Hound stands next to it; a limited number
//!   of tracking charges reveal it for one move.
//!
//! ## Design Principles
//!
//! 1. **Pure state transitions**: every operation takes `&MatchState` and
//!    returns a new `MatchState` or a `RuleError`. Nothing is mutated in
//!    place, so any snapshot can be shared or kept.
//!
//! 2. **Value snapshots**: boards are `Copy` arrays and the history is an
//!    `im::Vector`, so cloning a match is O(1) and history entries never
//!    alias.
//!
//! 3. **Fallible collaborators at the edges**: the Hare's oracle and saved
//!    games are untrusted. Bad oracle replies become random legal moves;
//!    bad saves are rejected or replaced by a new match.
//!
//! ## Modules
//!
//! - `core`: topology, board, sides, configuration, RNG, match state
//! - `rules`: legality, turn/win state machine, visibility and tracking
//! - `history`: snapshot log and undo
//! - `oracle`: request/reply contract with the Hare's oracle, fallback
//! - `persistence`: save format with defaults for older saves
//! - `controller`: selection handling for the renderer

pub mod core;
pub mod rules;
pub mod history;
pub mod oracle;
pub mod persistence;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{
    Board, Difficulty, GamePhase, GameRng, MatchConfig, MatchState, Occupant, Position, Side,
};

pub use crate::rules::{
    apply_move, evaluate_phase, is_hare_visible, legal_destinations, track_hare, Move, RuleError,
};

pub use crate::history::{undo, History};

pub use crate::oracle::{HareOracle, OracleError, OracleRequest, RandomOracle};

pub use crate::persistence::PersistenceError;

pub use crate::controller::HoundsController;
