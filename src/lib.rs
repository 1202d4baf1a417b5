//! Myco Runner - a lane-based endless runner game core
//!
//! Core modules:
//! - `session`: Authoritative game state machine (lives, score, levels, economy)
//! - `runner`: Lane/jump movement for the player avatar
//! - `shop`: Upgrade store catalog
//! - `tuning`: Data-driven game balance
//! - `web`: Browser interface boundary (wasm32 only)

pub mod runner;
pub mod session;
pub mod shop;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use session::{GameStatus, ItemKind, Session};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Baseline forward run speed (world units per second)
    pub const RUN_SPEED_BASE: f32 = 22.5;
    /// Completing this level's word wins the run
    pub const MAX_LEVEL: u32 = 10;
    /// Lane count cap reached through repeated level advances
    pub const MAX_LANE_COUNT: u32 = 12;

    /// Lateral distance between adjacent lanes
    pub const LANE_WIDTH: f32 = 2.2;
    /// Apex height of a single jump
    pub const JUMP_HEIGHT: f32 = 2.5;
    /// Airtime of a single jump (seconds)
    pub const JUMP_DURATION: f32 = 0.6;
    /// Downward acceleration while airborne
    pub const GRAVITY: f32 = 50.0;
    /// Upward impulse on jump (apex ~2.56 = v^2 / 2g)
    pub const JUMP_FORCE: f32 = 16.0;

    /// How far ahead of the avatar the world spawns objects
    pub const SPAWN_DISTANCE: f32 = 120.0;
    /// How far behind the avatar objects are culled
    pub const REMOVE_DISTANCE: f32 = 20.0;

    /// The letters of a level's target word, in display order
    pub const TARGET_WORD: [char; 12] = [
        'S', 'P', 'O', 'R', 'E', 'N', 'S', 'P', 'R', 'O', 'U', 'T',
    ];

    /// Display color per letter tile, parallel to `TARGET_WORD`
    pub const WORD_COLORS: [&str; 12] = [
        "#2979ff", // S - Blue
        "#ff1744", // P - Red
        "#ffea00", // O - Yellow
        "#00e676", // R - Green
        "#d500f9", // E - Purple
        "#00bcd4", // N - Cyan
        "#2979ff", // S - Blue
        "#ff1744", // P - Red
        "#00e676", // R - Green
        "#ffea00", // O - Yellow
        "#ff9100", // U - Orange
        "#f50057", // T - Pink
    ];
}
