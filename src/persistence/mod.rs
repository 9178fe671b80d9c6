//! Saving and restoring matches.
//!
//! Saved data is untrusted. Missing fields from older saves get defaults,
//! unknown fields are ignored, and anything that cannot describe a valid
//! match is rejected with [`PersistenceError`]. [`load_or_new`] turns that
//! rejection into a fresh match, the way a corrupt save is discarded.

pub mod error;
pub mod record;

pub use error::PersistenceError;
pub use record::{SavedMatch, SavedPiece, SavedSlot, SavedStatus, SavedTurn};

use tracing::warn;

use crate::core::MatchState;

/// Encode a match as JSON.
///
/// # Errors
///
/// Only if serialization itself fails.
pub fn save(state: &MatchState) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(&SavedMatch::from_state(state))?)
}

/// Restore a match from JSON text.
///
/// # Errors
///
/// [`PersistenceError`] if the text is not a usable save.
pub fn load(text: &str) -> Result<MatchState, PersistenceError> {
    let saved: SavedMatch = serde_json::from_str(text)?;
    saved.into_state()
}

/// Restore a match from an already-parsed JSON value.
///
/// # Errors
///
/// Same as [`load`].
pub fn load_value(value: serde_json::Value) -> Result<MatchState, PersistenceError> {
    let saved: SavedMatch = serde_json::from_value(value)?;
    saved.into_state()
}

/// Restore a match, or start a new level-1 match if the save is unusable.
#[must_use]
pub fn load_or_new(text: &str) -> MatchState {
    load(text).unwrap_or_else(|err| {
        warn!(error = %err, "discarding unreadable save, starting a new game");
        MatchState::new()
    })
}
