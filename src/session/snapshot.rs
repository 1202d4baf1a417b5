//! Read model for the presentation layer
//!
//! Captured fresh each render tick. Everything the HUD draws comes from
//! here, including the derived countdown values, so the drawing code
//! never reaches into the session or the clock itself.

use serde::Serialize;

use crate::consts::{TARGET_WORD, WORD_COLORS};
use crate::session::clock::Clock;
use crate::session::state::{GameStatus, Session};

/// Per-frame view of the session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub status: GameStatus,
    pub score: u64,
    pub lives: u32,
    pub max_lives: u32,
    pub speed: f32,
    /// Speed as a rounded percentage of baseline
    pub speed_percent: u32,
    pub level: u32,
    pub max_level: u32,
    pub lane_count: u32,
    /// Collected indices into the target word, ascending
    pub collected_letters: Vec<usize>,
    pub gems_collected: u32,
    pub distance: f32,
    pub has_double_jump: bool,
    pub has_immortality: bool,
    pub is_immortality_active: bool,
    pub mycelial_link_count: u32,
    pub magnet_active: bool,
    pub magnet_remaining_secs: u32,
    /// Countdown blink cue for the magnet timer
    pub magnet_blinking: bool,
    /// Any damage-ignoring window is open
    pub invulnerable: bool,
}

/// One tile of the word progress strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetterTile {
    pub letter: char,
    pub color: &'static str,
    pub collected: bool,
}

impl<C: Clock> Session<C> {
    /// Capture the current frame's view
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            score: self.score,
            lives: self.lives,
            max_lives: self.max_lives,
            speed: self.speed,
            speed_percent: self.speed_percent(),
            level: self.level,
            max_level: self.tuning().max_level,
            lane_count: self.lane_count,
            collected_letters: self.collected_letters.iter().copied().collect(),
            gems_collected: self.gems_collected,
            distance: self.distance,
            has_double_jump: self.has_double_jump,
            has_immortality: self.has_immortality,
            is_immortality_active: self.is_immortality_active,
            mycelial_link_count: self.mycelial_link_count,
            magnet_active: self.magnet_active(),
            magnet_remaining_secs: self.magnet_remaining_secs(),
            magnet_blinking: self.magnet_blinking(),
            invulnerable: self.is_invulnerable(),
        }
    }

    /// The word progress strip with per-tile colors
    pub fn letter_tiles(&self) -> Vec<LetterTile> {
        TARGET_WORD
            .iter()
            .zip(WORD_COLORS.iter())
            .enumerate()
            .map(|(i, (&letter, &color))| LetterTile {
                letter,
                color,
                collected: self.is_letter_collected(i),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::session::clock::ManualClock;
    use crate::session::state::Session;
    use crate::tuning::Tuning;

    fn playing() -> (ManualClock, Session<ManualClock>) {
        let clock = ManualClock::new();
        let mut session = Session::new(clock.clone(), Tuning::default());
        session.start();
        (clock, session)
    }

    #[test]
    fn test_snapshot_mirrors_session_fields() {
        let (clock, mut s) = playing();
        clock.advance(3_500.0);
        s.collect_gem(40);
        s.collect_letter(2);
        let snap = s.snapshot();
        assert_eq!(snap.score, 40);
        assert_eq!(snap.gems_collected, 1);
        assert_eq!(snap.collected_letters, vec![2]);
        assert_eq!(snap.speed_percent, 102);
        assert_eq!(snap.max_level, 10);
        assert!(!snap.invulnerable);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let (_, s) = playing();
        let json = serde_json::to_string(&s.snapshot()).unwrap();
        assert!(json.contains("\"status\":\"PLAYING\""));
        assert!(json.contains("\"lives\":3"));
        assert!(json.contains("\"lane_count\":3"));
    }

    #[test]
    fn test_letter_tiles_follow_collection() {
        let (clock, mut s) = playing();
        clock.advance(3_500.0);
        s.collect_letter(0);
        let tiles = s.letter_tiles();
        assert_eq!(tiles.len(), 12);
        assert_eq!(tiles[0].letter, 'S');
        assert_eq!(tiles[0].color, "#2979ff");
        assert!(tiles[0].collected);
        assert!(!tiles[6].collected);
    }
}
