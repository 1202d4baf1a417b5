//! Player avatar movement
//!
//! Lane changes and jump physics for the runner. The session owns the
//! rules of the run; this type owns where the avatar actually is. Lane
//! validity - clamping shifts and re-aligning when the track widens - is
//! handled here, never by the session.

use glam::Vec2;
use serde::Serialize;

use crate::consts::{GRAVITY, JUMP_FORCE, LANE_WIDTH};

/// How quickly the avatar slides toward its target lane (per second)
const LANE_LERP_RATE: f32 = 15.0;

/// Player avatar position and jump state
#[derive(Debug, Clone, Serialize)]
pub struct Runner {
    /// Signed lane offset from track center. Odd lane counts use whole
    /// steps (3 lanes: -1..1), even counts use half steps (4 lanes:
    /// -1.5..1.5).
    pub lane: f32,
    /// World position: x lateral, y height above the track
    pub pos: Vec2,
    velocity_y: f32,
    jumps_used: u32,
    airborne: bool,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    /// Avatar at track center, on the ground
    pub fn new() -> Self {
        Self {
            lane: 0.0,
            pos: Vec2::ZERO,
            velocity_y: 0.0,
            jumps_used: 0,
            airborne: false,
        }
    }

    /// Back to center for a fresh run
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Outermost valid lane offset for `lane_count` lanes
    pub fn max_lane(lane_count: u32) -> f32 {
        lane_count.saturating_sub(1) as f32 / 2.0
    }

    /// Shift one lane left (negative) or right (positive), clamped to
    /// the track edge
    pub fn move_lane(&mut self, direction: i32, lane_count: u32) {
        let max = Self::max_lane(lane_count);
        self.lane = (self.lane + direction.signum() as f32).clamp(-max, max);
    }

    /// Jump, or double-jump mid-air when the upgrade allows it
    pub fn jump(&mut self, has_double_jump: bool) {
        let max_jumps = if has_double_jump { 2 } else { 1 };
        if !self.airborne {
            self.airborne = true;
            self.jumps_used = 1;
            self.velocity_y = JUMP_FORCE;
        } else if self.jumps_used < max_jumps {
            // mid-air jump replaces the fall with a fresh impulse
            self.jumps_used += 1;
            self.velocity_y = JUMP_FORCE;
        }
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub fn jumps_used(&self) -> u32 {
        self.jumps_used
    }

    /// Advance lateral smoothing and jump physics by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let target_x = self.lane * LANE_WIDTH;
        self.pos.x += (target_x - self.pos.x) * (LANE_LERP_RATE * dt).min(1.0);

        if self.airborne {
            self.pos.y += self.velocity_y * dt;
            self.velocity_y -= GRAVITY * dt;
            if self.pos.y <= 0.0 {
                self.pos.y = 0.0;
                self.velocity_y = 0.0;
                self.airborne = false;
                self.jumps_used = 0;
            }
        }
    }

    /// Snap to the new track grid after the lane count changes. Even
    /// counts sit on x.5 offsets, odd counts on integers; then clamp to
    /// the (possibly narrower) edge.
    pub fn realign(&mut self, lane_count: u32) {
        let max = Self::max_lane(lane_count);
        let even_count = lane_count % 2 == 0;
        let on_half_step = (self.lane.fract().abs() - 0.5).abs() < 1e-3;

        if even_count && !on_half_step {
            self.lane += 0.5;
        } else if !even_count && on_half_step {
            self.lane -= 0.5;
        }
        self.lane = self.lane.clamp(-max, max);
    }
}
