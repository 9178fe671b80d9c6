//! Save-file failures.

use crate::core::MalformedBoard;

/// Why a saved match could not be restored.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// Not JSON, or a required field is missing or mistyped.
    #[error("unreadable save: {0}")]
    Json(#[from] serde_json::Error),

    /// A board slot names a node that does not exist.
    #[error("slot id {0} is not a board node")]
    UnknownNode(i64),

    /// A board lists the same node twice.
    #[error("node {0} appears twice in a board")]
    DuplicateNode(u8),

    /// A board does not list every node.
    #[error("node {0} is missing from a board")]
    MissingNode(u8),

    /// A board breaks the piece counts.
    #[error(transparent)]
    Malformed(#[from] MalformedBoard),

    /// The last history entry is not the current board.
    #[error("history does not end at the current board")]
    HistoryMismatch,
}
