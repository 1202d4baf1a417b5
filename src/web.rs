//! Browser interface boundary
//!
//! Thin wasm-bindgen shell around one session and one runner. The page's
//! world, input, and HUD layers dispatch intents through here and read
//! the JSON snapshots back each frame; no game rule lives on the JS side.

use wasm_bindgen::prelude::*;

use crate::consts;
use crate::runner::Runner;
use crate::session::{GameStatus, ItemKind, Session, SystemClock};
use crate::shop;
use crate::tuning::Tuning;

fn init_platform() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// One playable game instance
#[wasm_bindgen]
pub struct MycoRunner {
    session: Session<SystemClock>,
    runner: Runner,
    last_lane_count: u32,
}

impl MycoRunner {
    fn with_tuning_values(tuning: Tuning) -> Self {
        let session = Session::new(SystemClock::new(), tuning);
        let last_lane_count = session.lane_count;
        Self {
            session,
            runner: Runner::new(),
            last_lane_count,
        }
    }
}

#[wasm_bindgen]
impl MycoRunner {
    /// Game with the shipped balance
    #[wasm_bindgen(constructor)]
    pub fn new() -> MycoRunner {
        init_platform();
        log::info!("Myco Runner core ready");
        Self::with_tuning_values(Tuning::default())
    }

    /// Game with JSON balance overrides; malformed input falls back to
    /// the shipped balance
    pub fn with_tuning(json: &str) -> MycoRunner {
        init_platform();
        let tuning = Tuning::from_json(json).unwrap_or_else(|e| {
            log::warn!("Bad tuning JSON, using defaults: {e}");
            Tuning::default()
        });
        Self::with_tuning_values(tuning)
    }

    // --- Menu / HUD intents ---

    pub fn start(&mut self) {
        log::info!("Run started");
        self.session.start();
        self.runner.reset();
        self.last_lane_count = self.session.lane_count;
    }

    pub fn restart(&mut self) {
        log::info!("Run restarted");
        self.session.restart();
        self.runner.reset();
        self.last_lane_count = self.session.lane_count;
    }

    pub fn open_shop(&mut self) {
        self.session.open_shop();
    }

    pub fn close_shop(&mut self) {
        self.session.close_shop();
    }

    /// Attempt a purchase by catalog id; returns whether it succeeded
    pub fn buy_item(&mut self, id: &str, cost: u32) -> bool {
        let Some(kind) = ItemKind::from_str(id) else {
            log::warn!("Unknown shop item id: {id}");
            return false;
        };
        let ok = self.session.buy_item(kind, cost as u64);
        if ok {
            log::info!("Bought {id} for {cost}");
        }
        ok
    }

    // --- Input intents ---

    pub fn move_lane(&mut self, direction: i32) {
        if self.session.status == GameStatus::Playing {
            self.runner.move_lane(direction, self.session.lane_count);
        }
    }

    pub fn jump(&mut self) {
        if self.session.status == GameStatus::Playing {
            self.runner.jump(self.session.has_double_jump);
        }
    }

    pub fn activate_immortality(&mut self) {
        self.session.activate_immortality();
    }

    // --- World intents ---

    pub fn collision_detected(&mut self) {
        self.session.take_damage();
    }

    pub fn collect_gem(&mut self, value: u32) {
        self.session.collect_gem(value as u64);
    }

    pub fn collect_letter(&mut self, index: usize) {
        self.session.collect_letter(index);
    }

    pub fn add_score(&mut self, amount: u32) {
        self.session.add_score(amount as u64);
    }

    pub fn set_distance(&mut self, dist: f32) {
        self.session.set_distance(dist);
    }

    /// Per-frame pump: fires due deferred transitions, re-aligns the
    /// avatar when a level advance changed the track, advances physics
    pub fn tick(&mut self, dt: f32) {
        self.session.tick();
        if self.session.lane_count != self.last_lane_count {
            self.last_lane_count = self.session.lane_count;
            self.runner.realign(self.last_lane_count);
            log::info!(
                "Level {}: track widened to {} lanes",
                self.session.level,
                self.last_lane_count
            );
        }
        self.runner.update(dt);
    }

    // --- Read-only views ---

    pub fn status(&self) -> String {
        self.session.status.as_str().to_string()
    }

    /// Full HUD snapshot as JSON
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Word progress strip (letters, colors, collected flags) as JSON
    pub fn letters_json(&self) -> String {
        serde_json::to_string(&self.session.letter_tiles()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Store entries currently on offer as JSON
    pub fn shop_json(&self) -> String {
        serde_json::to_string(&shop::available_items(&self.session))
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Avatar position and jump state as JSON
    pub fn runner_json(&self) -> String {
        serde_json::to_string(&self.runner).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn lane_width(&self) -> f32 {
        consts::LANE_WIDTH
    }

    pub fn spawn_distance(&self) -> f32 {
        consts::SPAWN_DISTANCE
    }

    pub fn remove_distance(&self) -> f32 {
        consts::REMOVE_DISTANCE
    }
}

impl Default for MycoRunner {
    fn default() -> Self {
        Self::new()
    }
}
