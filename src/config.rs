//! Tunables for the utilities, stored as JSON in ~/.playkit/.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, POINTS_PER_LEVEL};
use crate::leveling::Leveling;
use crate::rewards::RewardChances;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaykitConfig {
    /// Score needed per level
    pub points_per_level: i64,

    /// Loot chances for the reward draw
    pub rewards: RewardChances,

    /// Seed for the toolkit generator (None = OS entropy)
    pub seed: Option<u64>,
}

impl Default for PlaykitConfig {
    fn default() -> Self {
        Self {
            points_per_level: POINTS_PER_LEVEL,
            rewards: RewardChances::default(),
            seed: None,
        }
    }
}

impl PlaykitConfig {
    /// Fixed-seed config for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn leveling(&self) -> Leveling {
        Leveling::new(self.points_per_level)
    }

    /// Load a JSON config, returning defaults if missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => return Self::default(),
        };
        serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!(path = %path.display(), "invalid config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }
}

/// Get the ~/.playkit/ directory path, creating it if needed.
pub fn config_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(CONFIG_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default location of the config file, creating ~/.playkit/ for writing.
pub fn default_config_path() -> io::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Where the config file would live; touches nothing on disk.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PlaykitConfig::load_or_default(&dir.path().join("nope.json"));
        assert_eq!(config, PlaykitConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = PlaykitConfig {
            points_per_level: 150,
            rewards: RewardChances {
                primary: 0.25,
                secondary: 0.05,
                speedrun_multiplier: 2.0,
            },
            seed: Some(7),
        };
        config.save(&path).unwrap();
        assert_eq!(PlaykitConfig::load_or_default(&path), config);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "seed": 99, "rewards": { "primary": 0.5 } }"#).unwrap();

        let config = PlaykitConfig::load_or_default(&path);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.points_per_level, POINTS_PER_LEVEL);
        assert_eq!(config.rewards.primary, 0.5);
        assert_eq!(config.rewards.secondary, RewardChances::default().secondary);
    }

    #[test]
    fn test_invalid_json_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not json").unwrap();
        assert_eq!(PlaykitConfig::load_or_default(&path), PlaykitConfig::default());
    }

    #[test]
    fn test_config_file_path_format() {
        if let Some(path) = config_file_path() {
            assert!(path.ends_with(Path::new(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)));
        }
    }

    #[test]
    fn test_load_from_missing_dir_does_not_create_it() {
        let dir = TempDir::new().unwrap();
        let missing_dir = dir.path().join(CONFIG_DIR_NAME);
        let config = PlaykitConfig::load_or_default(&missing_dir.join(CONFIG_FILE_NAME));
        assert_eq!(config, PlaykitConfig::default());
        assert!(!missing_dir.exists());
    }

    #[test]
    fn test_leveling_from_config() {
        let config = PlaykitConfig {
            points_per_level: 0,
            ..Default::default()
        };
        assert_eq!(config.leveling().points_per_level(), POINTS_PER_LEVEL);
    }
}
