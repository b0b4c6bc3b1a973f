//! Monte Carlo tallies for the reward draw.

use crate::rewards::{draw_reward_with, Loot, RewardChances};
use rand::Rng;
use serde::Serialize;

/// Loot counts over many draws.
#[derive(Debug, Clone, Serialize)]
pub struct RewardStats {
    pub draws: u64,
    pub speedrun: bool,
    pub none: u64,
    pub primary: u64,
    pub secondary: u64,
    pub expected_primary: f64,
    pub expected_secondary: f64,
}

impl RewardStats {
    pub fn collect(
        chances: &RewardChances,
        speedrun: bool,
        draws: u64,
        rng: &mut impl Rng,
    ) -> Self {
        let (expected_primary, expected_secondary) = chances.effective(speedrun);
        let mut stats = Self {
            draws,
            speedrun,
            none: 0,
            primary: 0,
            secondary: 0,
            expected_primary,
            expected_secondary,
        };

        for _ in 0..draws {
            match draw_reward_with(chances, speedrun, rng).loot() {
                Loot::None => stats.none += 1,
                Loot::Primary => stats.primary += 1,
                Loot::Secondary => stats.secondary += 1,
            }
        }
        stats
    }

    pub fn count(&self, loot: Loot) -> u64 {
        match loot {
            Loot::None => self.none,
            Loot::Primary => self.primary,
            Loot::Secondary => self.secondary,
        }
    }

    /// Observed frequency of `loot`, 0.0 when nothing was drawn.
    pub fn rate(&self, loot: Loot) -> f64 {
        if self.draws == 0 {
            return 0.0;
        }
        self.count(loot) as f64 / self.draws as f64
    }

    pub fn win_rate(&self) -> f64 {
        self.rate(Loot::Primary) + self.rate(Loot::Secondary)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Reward draws: {} ({})\n",
            self.draws,
            if self.speedrun { "speedrun" } else { "normal" }
        ));
        for loot in Loot::ALL {
            let expected = match loot {
                Loot::None => 1.0 - self.expected_primary - self.expected_secondary,
                Loot::Primary => self.expected_primary,
                Loot::Secondary => self.expected_secondary,
            };
            out.push_str(&format!(
                "  {:<10} {:>10}  {:>6.2}%  (expected {:>6.2}%)\n",
                loot.name(),
                self.count(loot),
                self.rate(loot) * 100.0,
                expected * 100.0
            ));
        }
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_counts_sum_to_draws() {
        let mut rng = ChaCha8Rng::seed_from_u64(555);
        let stats = RewardStats::collect(&RewardChances::default(), false, 10_000, &mut rng);
        assert_eq!(stats.none + stats.primary + stats.secondary, 10_000);
    }

    #[test]
    fn test_zero_draws() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let stats = RewardStats::collect(&RewardChances::default(), true, 0, &mut rng);
        assert_eq!(stats.rate(Loot::Primary), 0.0);
        assert_eq!(stats.win_rate(), 0.0);
    }

    #[test]
    fn test_text_and_json_output() {
        let mut rng = ChaCha8Rng::seed_from_u64(777);
        let stats = RewardStats::collect(&RewardChances::default(), true, 100, &mut rng);
        let text = stats.to_text();
        assert!(text.contains("speedrun"));
        assert!(text.contains("Primary"));
        let json: serde_json::Value = serde_json::from_str(&stats.to_json()).unwrap();
        assert_eq!(json["draws"], 100);
    }
}
