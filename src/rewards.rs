//! Weighted reward draw.
//!
//! One uniform roll picks between two loot tiers and "nothing". Speedrun
//! mode scales both chances; the scaled pair is clamped so the total never
//! exceeds 1.

use crate::constants::{PRIMARY_LOOT_CHANCE, SECONDARY_LOOT_CHANCE, SPEEDRUN_CHANCE_MULTIPLIER};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Loot {
    None = 0,
    Primary = 1,
    Secondary = 2,
}

impl Loot {
    pub const ALL: [Loot; 3] = [Loot::None, Loot::Primary, Loot::Secondary];

    pub fn id(&self) -> u32 {
        *self as u32
    }

    pub fn from_id(id: u32) -> Option<Loot> {
        match id {
            0 => Some(Loot::None),
            1 => Some(Loot::Primary),
            2 => Some(Loot::Secondary),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Loot::None => "None",
            Loot::Primary => "Primary",
            Loot::Secondary => "Secondary",
        }
    }
}

/// Result of a single reward draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardDraw {
    pub won: bool,
    pub loot_id: u32,
}

impl RewardDraw {
    pub fn from_loot(loot: Loot) -> Self {
        Self {
            won: loot != Loot::None,
            loot_id: loot.id(),
        }
    }

    pub fn loot(&self) -> Loot {
        Loot::from_id(self.loot_id).unwrap_or(Loot::None)
    }
}

/// Base chances for each loot tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardChances {
    pub primary: f64,
    pub secondary: f64,
    pub speedrun_multiplier: f64,
}

impl Default for RewardChances {
    fn default() -> Self {
        Self {
            primary: PRIMARY_LOOT_CHANCE,
            secondary: SECONDARY_LOOT_CHANCE,
            speedrun_multiplier: SPEEDRUN_CHANCE_MULTIPLIER,
        }
    }
}

impl RewardChances {
    /// Chances actually used for a draw, as `(primary, secondary)`.
    ///
    /// Primary is clamped into `[0, 1]` first and secondary gets whatever
    /// room is left, so `primary + secondary <= 1` always holds.
    pub fn effective(&self, speedrun: bool) -> (f64, f64) {
        let multiplier = if speedrun { self.speedrun_multiplier } else { 1.0 };
        let primary = clamp_chance(self.primary * multiplier, 1.0);
        let secondary = clamp_chance(self.secondary * multiplier, 1.0 - primary);
        (primary, secondary)
    }

    /// Chance of winning anything at all.
    pub fn win_chance(&self, speedrun: bool) -> f64 {
        let (primary, secondary) = self.effective(speedrun);
        primary + secondary
    }
}

fn clamp_chance(chance: f64, max: f64) -> f64 {
    if chance.is_nan() {
        return 0.0;
    }
    chance.clamp(0.0, max)
}

/// Map a roll in `[0, 1)` onto a loot tier.
pub fn loot_for_roll(roll: f64, chances: &RewardChances, speedrun: bool) -> Loot {
    let (primary, secondary) = chances.effective(speedrun);
    if roll < primary {
        Loot::Primary
    } else if roll < primary + secondary {
        Loot::Secondary
    } else {
        Loot::None
    }
}

pub fn draw_reward_with(chances: &RewardChances, speedrun: bool, rng: &mut impl Rng) -> RewardDraw {
    let roll = rng.gen::<f64>();
    RewardDraw::from_loot(loot_for_roll(roll, chances, speedrun))
}

/// Draw with the default chances from the calling thread's generator.
pub fn draw_reward(speedrun: bool) -> RewardDraw {
    let mut rng = rand::thread_rng();
    draw_reward_with(&RewardChances::default(), speedrun, &mut rng)
}
