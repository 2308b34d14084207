//! Core game constants

/// Default world dimensions (square grid)
pub const WORLD_SIZE: i32 = 20;

/// Largest accepted world side, in cells
pub const MAX_WORLD_SIZE: i32 = 255;

/// Stat bounds
pub const STAT_MIN: f32 = 0.0;
pub const STAT_MAX: f32 = 100.0;

/// Stat severity thresholds (inclusive)
pub const CRITICAL_THRESHOLD: f32 = 20.0;
pub const WARNING_THRESHOLD: f32 = 50.0;

/// Flashlight battery bounds
pub const BATTERY_MAX: f32 = 100.0;

/// Hours in a game day
pub const HOURS_PER_DAY: f32 = 24.0;

/// Night spans [NIGHT_START, 24) and [0, NIGHT_END)
pub const NIGHT_START: f32 = 20.0;
pub const NIGHT_END: f32 = 6.0;

/// Sight radius at night (Manhattan), with and without a lit flashlight
pub const FLASHLIGHT_SIGHT: i32 = 6;
pub const DARK_SIGHT: i32 = 2;

/// Reach for looting and melee (Manhattan)
pub const REACH: i32 = 1;

/// Maximum number of messages kept in the log
pub const MAX_MESSAGES: usize = 50;
