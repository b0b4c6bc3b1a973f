//! Score-based leveling: every `points_per_level` points is one level.
//!
//! Division floors toward negative infinity, so negative scores land on
//! level 0 or below and progress stays in `[0, 1)` for every score.

use crate::constants::{POINTS_PER_LEVEL, STARTING_LEVEL};
use tracing::warn;

/// Leveling curve with a fixed number of points per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leveling {
    points_per_level: i64,
}

impl Default for Leveling {
    fn default() -> Self {
        Self {
            points_per_level: POINTS_PER_LEVEL,
        }
    }
}

impl Leveling {
    /// A non-positive step falls back to the default of 200.
    pub fn new(points_per_level: i64) -> Self {
        if points_per_level <= 0 {
            warn!(
                points_per_level,
                "points per level must be positive, using {}", POINTS_PER_LEVEL
            );
            return Self::default();
        }
        Self { points_per_level }
    }

    pub fn points_per_level(&self) -> i64 {
        self.points_per_level
    }

    pub fn level(&self, score: i64) -> i64 {
        score.div_euclid(self.points_per_level) + STARTING_LEVEL
    }

    /// Fraction of the current level already earned, in `[0, 1)`.
    pub fn progress(&self, score: i64) -> f64 {
        score.rem_euclid(self.points_per_level) as f64 / self.points_per_level as f64
    }

    pub fn has_leveled_up(&self, old_score: i64, new_score: i64) -> bool {
        self.level(old_score) != self.level(new_score)
    }

    /// Signed number of levels between the two scores.
    pub fn levels_gained(&self, old_score: i64, new_score: i64) -> i64 {
        self.level(new_score) - self.level(old_score)
    }

    /// Score still needed to reach the next level.
    pub fn points_to_next_level(&self, score: i64) -> i64 {
        self.points_per_level - score.rem_euclid(self.points_per_level)
    }
}

pub fn calculate_level(score: i64) -> i64 {
    Leveling::default().level(score)
}

pub fn level_progress(score: i64) -> f64 {
    Leveling::default().progress(score)
}

pub fn has_leveled_up(old_score: i64, new_score: i64) -> bool {
    Leveling::default().has_leveled_up(old_score, new_score)
}

pub fn levels_gained(old_score: i64, new_score: i64) -> i64 {
    Leveling::default().levels_gained(old_score, new_score)
}
