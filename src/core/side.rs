//! The two sides of a match.

use serde::{Deserialize, Serialize};

use super::board::Occupant;

/// Whose turn it is.
///
/// The human always plays the Hounds; the Hare is driven by an oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Hounds,
    Hare,
}

impl Side {
    /// The side that moves after this one.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Hounds => Side::Hare,
            Side::Hare => Side::Hounds,
        }
    }

    /// The piece kind this side moves.
    #[must_use]
    pub const fn piece(self) -> Occupant {
        match self {
            Side::Hounds => Occupant::Hound,
            Side::Hare => Occupant::Hare,
        }
    }

    /// Check if an occupant belongs to this side.
    #[must_use]
    pub fn owns(self, occupant: Occupant) -> bool {
        occupant == self.piece()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Hounds => write!(f, "Hounds"),
            Side::Hare => write!(f, "Hare"),
        }
    }
}
