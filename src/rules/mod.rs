//! Game rules: legality, turn/win state machine, visibility.
//!
//! All functions are pure: they read a `Board` or `MatchState` and return
//! new values. Rejections are reported as [`RuleError`].

pub mod legality;
pub mod visibility;
pub mod engine;
pub mod error;

pub use legality::{hare_destinations, hound_may_step, is_legal, legal_destinations, Destinations};
pub use visibility::{is_hare_visible, track_hare};
pub use engine::{apply_move, evaluate_phase, legal_moves, Move};
pub use error::RuleError;
