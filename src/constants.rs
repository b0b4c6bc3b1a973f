// Leveling
pub const POINTS_PER_LEVEL: i64 = 200;
pub const STARTING_LEVEL: i64 = 1;

// Reward draw
pub const PRIMARY_LOOT_CHANCE: f64 = 0.20;
pub const SECONDARY_LOOT_CHANCE: f64 = 0.10;
pub const SPEEDRUN_CHANCE_MULTIPLIER: f64 = 3.0;

// Top player records
pub const RECORD_SEPARATOR: &str = "),(";
pub const RECORD_FIELD_COUNT: usize = 3;

// Version file
pub const VERSION_PREFIX: &str = "Version ";
pub const VERSION_FILE_NAME: &str = "gameversion.txt";

// Config
pub const CONFIG_DIR_NAME: &str = ".playkit";
pub const CONFIG_FILE_NAME: &str = "config.json";
