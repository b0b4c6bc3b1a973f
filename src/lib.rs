//! Playkit - small gameplay utilities for scripted game logic.
//!
//! Leveling math, weighted reward draws, unique random sampling, number
//! padding, leaderboard parsing and a few host-side helpers. Every function
//! is independent; randomness comes from a caller-supplied generator, the
//! calling thread's generator, or a [`toolkit::Toolkit`].

pub mod calendar;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod leveling;
pub mod records;
pub mod rewards;
pub mod sampling;
pub mod stats;
pub mod toolkit;
pub mod version_file;

pub use error::{ErrorKind, UtilError};
pub use format::pad_with_zeros;
pub use leveling::{calculate_level, has_leveled_up, level_progress};
pub use records::{parse_records, TopPlayer};
pub use rewards::{draw_reward, Loot, RewardChances, RewardDraw};
pub use sampling::{sample_unique, sample_unique_ints};
pub use toolkit::Toolkit;
