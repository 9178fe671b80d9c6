//! Move history and undo.
//!
//! - `log`: the append-only snapshot log kept in every `MatchState`
//! - `undo`: two-ply rollback offered to the human side

pub mod log;
pub mod undo;

pub use log::{EmptyHistory, History};
pub use undo::{undo, undo_available};
