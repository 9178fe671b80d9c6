//! Core engine types: topology, board, sides, configuration, RNG, match state.
//!
//! Everything here is plain data. Rules that move pieces live in
//! [`crate::rules`]; the undo log lives in [`crate::history`].

pub mod position;
pub mod board;
pub mod side;
pub mod config;
pub mod rng;
pub mod state;

pub use position::{Position, InvalidPosition, BACK_RANK, HARE_GOAL, NODE_COUNT};
pub use board::{Board, MalformedBoard, Occupant, HOUND_COUNT, INITIAL_BOARD};
pub use side::Side;
pub use config::{Difficulty, MatchConfig, INITIAL_TRACKING_CHARGES, TOTAL_LEVELS};
pub use rng::GameRng;
pub use state::{GamePhase, MatchState};
