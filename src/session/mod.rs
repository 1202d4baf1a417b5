//! Authoritative game session
//!
//! All run-time rules live here: lives and damage windows, score and the
//! purchase economy, letter collection and level advancement, timed
//! power-ups and the deferred transitions they schedule. The module is
//! platform-free: time comes from an injected clock, and no rendering or
//! input code is allowed in.

pub mod clock;
pub mod snapshot;
pub mod state;

mod actions;

pub use clock::{Clock, ManualClock, SystemClock};
pub use snapshot::{LetterTile, Snapshot};
pub use state::{GameStatus, ItemKind, Session, MAGNET_BLINK_SECS};
