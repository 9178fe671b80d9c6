//! Match configuration: tracking charges, level range, difficulty.
//!
//! The board itself is not configurable; these knobs only cover the
//! campaign around it.

use serde::{Deserialize, Serialize};

/// Tracking charges granted at the start of every match.
///
/// Also the value assumed when a saved match predates the tracking feature.
pub const INITIAL_TRACKING_CHARGES: u32 = 3;

/// Number of levels in the campaign.
pub const TOTAL_LEVELS: u32 = 10;

/// Skill tag passed to the Hare's oracle.
///
/// Opaque to the rules engine; only the oracle interprets it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Difficulty for a campaign level: 1-3 Easy, 4-7 Medium, then Hard.
    #[must_use]
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=3 => Difficulty::Easy,
            4..=7 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Tracking charges at the start of a match.
    pub tracking_charges: u32,

    /// Highest campaign level. Levels run `1..=total_levels`.
    pub total_levels: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            tracking_charges: INITIAL_TRACKING_CHARGES,
            total_levels: TOTAL_LEVELS,
        }
    }
}

impl MatchConfig {
    /// Set the tracking charges per match.
    #[must_use]
    pub fn with_tracking_charges(mut self, charges: u32) -> Self {
        self.tracking_charges = charges;
        self
    }

    /// Set the number of campaign levels (at least 1).
    #[must_use]
    pub fn with_total_levels(mut self, levels: u32) -> Self {
        self.total_levels = levels.max(1);
        self
    }

    /// Clamp a level into `1..=total_levels`.
    #[must_use]
    pub fn clamp_level(&self, level: u32) -> u32 {
        level.clamp(1, self.total_levels.max(1))
    }
}
