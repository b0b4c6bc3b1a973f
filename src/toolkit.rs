//! Service object bundling config with a generator seeded once.
//!
//! A `Toolkit` owns its generator, so it is `Send` but not shared: give each
//! thread its own instance or wrap one in a `Mutex`.

use crate::config::PlaykitConfig;
use crate::error::UtilError;
use crate::leveling::Leveling;
use crate::rewards::{draw_reward_with, RewardDraw};
use crate::sampling;
use crate::stats::RewardStats;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

pub struct Toolkit {
    config: PlaykitConfig,
    leveling: Leveling,
    rng: ChaCha8Rng,
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::new(PlaykitConfig::default())
    }
}

impl Toolkit {
    pub fn new(config: PlaykitConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        debug!(seed = ?config.seed, "toolkit generator seeded");
        Self {
            leveling: config.leveling(),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &PlaykitConfig {
        &self.config
    }

    pub fn level(&self, score: i64) -> i64 {
        self.leveling.level(score)
    }

    pub fn progress(&self, score: i64) -> f64 {
        self.leveling.progress(score)
    }

    pub fn leveled_up(&self, old_score: i64, new_score: i64) -> bool {
        self.leveling.has_leveled_up(old_score, new_score)
    }

    pub fn draw_reward(&mut self, speedrun: bool) -> RewardDraw {
        draw_reward_with(&self.config.rewards, speedrun, &mut self.rng)
    }

    pub fn reward_stats(&mut self, speedrun: bool, draws: u64) -> RewardStats {
        RewardStats::collect(&self.config.rewards, speedrun, draws, &mut self.rng)
    }

    pub fn sample_unique<T: Clone>(&mut self, items: &[T], k: usize) -> Vec<T> {
        sampling::sample_unique(items, k, &mut self.rng)
    }

    pub fn try_sample_unique<T: Clone>(&mut self, items: &[T], k: usize) -> Result<Vec<T>, UtilError> {
        sampling::try_sample_unique(items, k, &mut self.rng)
    }

    pub fn sample_unique_ints(&mut self, min: i32, max: i32, count: usize) -> Vec<i32> {
        sampling::sample_unique_ints(min, max, count, &mut self.rng)
    }

    pub fn try_sample_unique_ints(
        &mut self,
        min: i32,
        max: i32,
        count: usize,
    ) -> Result<Vec<i32>, UtilError> {
        sampling::try_sample_unique_ints(min, max, count, &mut self.rng)
    }
}
