//! Data-driven game balance
//!
//! Every pacing and economy number in one place. `Default` is the
//! shipped balance; the embedding page can override any subset through
//! JSON at construction time.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Balance values consumed by the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Baseline forward run speed
    pub run_speed_base: f32,
    /// Completing this level's word wins the run
    pub max_level: u32,
    /// Lane count cap
    pub max_lane_count: u32,
    pub starting_lives: u32,
    pub starting_lanes: u32,
    /// Grace window after a (re)start, ms
    pub start_grace_ms: f64,
    /// Grace window after a level advance, ms
    pub level_grace_ms: f64,
    /// Minimum gap between accepted hits, ms
    pub damage_cooldown_ms: f64,
    /// Immortality ability window, ms
    pub immortality_duration_ms: f64,
    /// Magnetic field window, ms
    pub magnet_duration_ms: f64,
    /// Delay before a link purchase may flip the level, ms
    pub link_word_check_delay_ms: f64,
    /// Speed gain per letter pickup, as a fraction of base
    pub letter_speed_bonus: f32,
    /// Speed gain per level advance, as a fraction of base
    pub level_speed_bonus: f32,
    /// Flat score award for winning the final level
    pub victory_bonus: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            run_speed_base: consts::RUN_SPEED_BASE,
            max_level: consts::MAX_LEVEL,
            max_lane_count: consts::MAX_LANE_COUNT,
            starting_lives: 3,
            starting_lanes: 3,
            start_grace_ms: 3_000.0,
            level_grace_ms: 5_000.0,
            damage_cooldown_ms: 1_000.0,
            immortality_duration_ms: 5_000.0,
            magnet_duration_ms: 20_000.0,
            link_word_check_delay_ms: 500.0,
            letter_speed_bonus: 0.02,
            level_speed_bonus: 0.10,
            victory_bonus: 5_000,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON; fields left out keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
