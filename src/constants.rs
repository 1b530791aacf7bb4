//! Balance and timing constants.
//!
//! All tunable numbers live here. Change once, test everywhere.

// Reward table defaults (coins per completed quest, before weather scaling)
pub const EASY_REWARD: u64 = 10;
pub const MEDIUM_REWARD: u64 = 20;
pub const HARD_REWARD: u64 = 30;

// Weather cycle timing and reward multipliers
pub const WEATHER_CYCLE_SECS: u64 = 300; // 5 minutes per phase
pub const CLEAR_MULTIPLIER: f64 = 1.0;
pub const STORM_MULTIPLIER: f64 = 1.5;
pub const FOG_MULTIPLIER: f64 = 1.25;

// Map placement: keep quest markers off the chart border
pub const MAP_MARGIN: f64 = 0.1;

// UI timing and limits
pub const INPUT_POLL_MS: u64 = 100;
pub const NOTIFICATION_LIMIT: usize = 6;
