//! Session state and core types
//!
//! Everything the presentation layer reads to draw a frame lives on
//! [`Session`]. Transition rules are in the sibling `actions` module.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_WORD;
use crate::session::clock::Clock;
use crate::tuning::Tuning;

/// Remaining magnet seconds at or below which the HUD blinks its timer
pub const MAGNET_BLINK_SECS: u32 = 5;

/// Which screen owns the player's input right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Title screen, no run in progress
    #[default]
    Menu,
    /// Live gameplay
    Playing,
    /// Upgrade store overlay; run timers keep counting
    Shop,
    /// Run lost; terminal until restart
    GameOver,
    /// Final word completed; terminal until restart
    Victory,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Menu => "MENU",
            GameStatus::Playing => "PLAYING",
            GameStatus::Shop => "SHOP",
            GameStatus::GameOver => "GAME_OVER",
            GameStatus::Victory => "VICTORY",
        }
    }
}

/// Purchasable upgrade identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    DoubleJump,
    MaxLife,
    Heal,
    Immortal,
    MycelialLink,
    MagneticField,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::DoubleJump => "DOUBLE_JUMP",
            ItemKind::MaxLife => "MAX_LIFE",
            ItemKind::Heal => "HEAL",
            ItemKind::Immortal => "IMMORTAL",
            ItemKind::MycelialLink => "MYCELIAL_LINK",
            ItemKind::MagneticField => "MAGNETIC_FIELD",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "DOUBLE_JUMP" => Some(ItemKind::DoubleJump),
            "MAX_LIFE" => Some(ItemKind::MaxLife),
            "HEAL" => Some(ItemKind::Heal),
            "IMMORTAL" => Some(ItemKind::Immortal),
            "MYCELIAL_LINK" => Some(ItemKind::MycelialLink),
            "MAGNETIC_FIELD" => Some(ItemKind::MagneticField),
            _ => None,
        }
    }
}

/// Deferred self-transition kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeferredKind {
    /// Flip `is_immortality_active` back off
    ImmortalityExpiry,
    /// Word-completion check after a mid-level link purchase
    WordCheck,
}

/// A scheduled transition; `generation` pins it to the run that scheduled it
#[derive(Debug, Clone, Copy)]
pub(crate) struct Deferred {
    pub fire_at_ms: f64,
    pub generation: u64,
    pub kind: DeferredKind,
}

/// Authoritative state for one play-through
pub struct Session<C: Clock> {
    pub status: GameStatus,
    pub score: u64,
    pub lives: u32,
    pub max_lives: u32,
    pub speed: f32,
    pub level: u32,
    pub lane_count: u32,
    /// Indices into `TARGET_WORD` collected this level
    pub collected_letters: BTreeSet<usize>,
    pub gems_collected: u32,
    pub distance: f32,

    // Inventory / abilities
    pub has_double_jump: bool,
    pub has_immortality: bool,
    pub is_immortality_active: bool,
    /// Consumable link stack; one charge burns per level advance
    pub mycelial_link_count: u32,
    /// Magnet active while now < this timestamp (ms)
    pub magnet_end_time: f64,

    // Damage windows
    /// Hits are ignored while now < this timestamp (ms)
    pub invulnerable_until: f64,
    /// Last accepted hit (ms); enforces the hit cooldown
    pub last_damage_time: f64,

    /// Bumped on every (re)start; stale deferred entries never fire
    pub(crate) generation: u64,
    pub(crate) deferred: Vec<Deferred>,
    pub(crate) tuning: Tuning,
    clock: C,
}

impl<C: Clock> Session<C> {
    /// Fresh session on the menu screen; call [`Session::start`] to begin a run
    pub fn new(clock: C, tuning: Tuning) -> Self {
        Self {
            status: GameStatus::Menu,
            score: 0,
            lives: tuning.starting_lives,
            max_lives: tuning.starting_lives,
            speed: 0.0,
            level: 1,
            lane_count: tuning.starting_lanes,
            collected_letters: BTreeSet::new(),
            gems_collected: 0,
            distance: 0.0,
            has_double_jump: false,
            has_immortality: false,
            is_immortality_active: false,
            mycelial_link_count: 0,
            magnet_end_time: 0.0,
            invulnerable_until: 0.0,
            last_damage_time: 0.0,
            generation: 0,
            deferred: Vec::new(),
            tuning,
            clock,
        }
    }

    /// Current time from the injected clock
    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Whether the magnet power-up is currently running
    pub fn magnet_active(&self) -> bool {
        self.now_ms() < self.magnet_end_time
    }

    /// Whole seconds left on the magnet, 0 when inactive
    pub fn magnet_remaining_secs(&self) -> u32 {
        ((self.magnet_end_time - self.now_ms()).max(0.0) / 1000.0).ceil() as u32
    }

    /// HUD cue once the magnet is nearly out
    pub fn magnet_blinking(&self) -> bool {
        self.magnet_active() && self.magnet_remaining_secs() <= MAGNET_BLINK_SECS
    }

    /// Damage is currently ignored (grace window or active immortality)
    pub fn is_invulnerable(&self) -> bool {
        self.is_immortality_active || self.now_ms() < self.invulnerable_until
    }

    /// Speed as a rounded percentage of the baseline run speed
    pub fn speed_percent(&self) -> u32 {
        ((self.speed / self.tuning.run_speed_base) * 100.0).round() as u32
    }

    /// True once every letter of the target word is collected
    pub fn word_complete(&self) -> bool {
        self.collected_letters.len() == TARGET_WORD.len()
    }

    pub fn is_letter_collected(&self, index: usize) -> bool {
        self.collected_letters.contains(&index)
    }
}
