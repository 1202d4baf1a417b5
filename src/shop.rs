//! Upgrade store catalog
//!
//! The session enforces affordability; this table owns what is on offer
//! and which entries the store screen should hide (owned one-time
//! unlocks, an already-running magnet).

use serde::Serialize;

use crate::session::clock::Clock;
use crate::session::state::{ItemKind, Session};

/// A purchasable entry as the store screen shows it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShopItem {
    pub kind: ItemKind,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
    /// Removed from the pool once owned
    pub one_time: bool,
}

/// Everything the store can ever offer
pub const CATALOG: [ShopItem; 6] = [
    ShopItem {
        kind: ItemKind::DoubleJump,
        name: "DOUBLE JUMP",
        description: "Jump again in mid-air. Essential for high obstacles.",
        cost: 1000,
        one_time: true,
    },
    ShopItem {
        kind: ItemKind::MycelialLink,
        name: "MYCELIAL LINK",
        description: "Consumable (1 Level): Spores share value. Stacks.",
        cost: 1000,
        one_time: false,
    },
    ShopItem {
        kind: ItemKind::MagneticField,
        name: "SPORE MAGNET",
        description: "20s Active Field: Automatically attracts spores from adjacent lanes.",
        cost: 1000,
        one_time: false,
    },
    ShopItem {
        kind: ItemKind::MaxLife,
        name: "MAX LIFE UP",
        description: "Permanently adds a heart slot and heals you.",
        cost: 1500,
        one_time: false,
    },
    ShopItem {
        kind: ItemKind::Heal,
        name: "REPAIR KIT",
        description: "Restores 1 Life point instantly.",
        cost: 1000,
        one_time: false,
    },
    ShopItem {
        kind: ItemKind::Immortal,
        name: "IMMORTALITY",
        description: "Unlock Ability: Press Space/Tap to be invincible for 5s.",
        cost: 3000,
        one_time: true,
    },
];

/// Catalog lookup by item id
pub fn find(kind: ItemKind) -> &'static ShopItem {
    CATALOG
        .iter()
        .find(|item| item.kind == kind)
        .unwrap_or(&CATALOG[0])
}

/// Entries the store should currently display. One-time unlocks vanish
/// once owned, and the magnet stays hidden while a field is running.
pub fn available_items<C: Clock>(session: &Session<C>) -> Vec<ShopItem> {
    CATALOG
        .iter()
        .copied()
        .filter(|item| match item.kind {
            ItemKind::DoubleJump => !session.has_double_jump,
            ItemKind::Immortal => !session.has_immortality,
            ItemKind::MagneticField => !session.magnet_active(),
            _ => true,
        })
        .collect()
}
